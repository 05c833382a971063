// Message types exchanged between the TUI and the app orchestrator.

use bigode_core::SessionSnapshot;

/// Commands from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    AddPlayer(String),
    RenamePlayer { index: usize, name: String },
    RemovePlayer(usize),
    IncrementTeamSize,
    DecrementTeamSize,
    /// Draw teams from the current roster.
    Shuffle,
    /// Discard the draw and return to the roster screen.
    Restart,
    Quit,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Full session state after a command was applied.
    Snapshot(Box<SessionSnapshot>),
    /// Short message for the status bar, e.g. a rejected command.
    Notice(String),
}

/// Which screen the TUI shows. Derived from whether a draw exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Roster,
    Teams,
}
