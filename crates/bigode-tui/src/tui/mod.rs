// Terminal UI: view state, input handling, layout, and widget rendering.
//
// The TUI owns a `ViewState` mirroring the last session snapshot. The app
// orchestrator pushes `UiUpdate` messages over an mpsc channel; the TUI
// applies them and re-renders on every tick.

pub mod input;
pub mod kits;
pub mod layout;
pub mod widgets;

use bigode_core::config::UiConfig;
use bigode_core::{SessionSnapshot, TeamDraw, TeamSize};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::protocol::{Screen, UiUpdate, UserCommand};
use input::InputMode;
use kits::{pick_kits, Kit};
use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state used for rendering.
pub struct ViewState {
    /// Heading shown in the status bar.
    pub title: String,
    pub show_kits: bool,
    /// Roster as last reported by the app.
    pub players: Vec<String>,
    pub team_size: TeamSize,
    /// Current draw. `Some` switches the TUI to the teams screen.
    pub draw: Option<TeamDraw>,
    /// One kit per group of `draw`, assigned when the draw arrives.
    pub kits: Vec<Kit>,
    /// Highlighted row in the roster list.
    pub selected: usize,
    pub input_mode: InputMode,
    /// Text being typed while adding or editing a player.
    pub input_buffer: String,
    /// Whether the quit confirmation prompt is showing.
    pub confirm_quit: bool,
    /// Last message for the user (rejected command, hint).
    pub notice: Option<String>,
    /// First line shown on the teams screen.
    pub teams_scroll: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(&UiConfig::default())
    }
}

impl ViewState {
    pub fn new(ui: &UiConfig) -> Self {
        ViewState {
            title: ui.title.clone(),
            show_kits: ui.show_kits,
            players: Vec::new(),
            team_size: TeamSize::default(),
            draw: None,
            kits: Vec::new(),
            selected: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            confirm_quit: false,
            notice: None,
            teams_scroll: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.draw.is_some() {
            Screen::Teams
        } else {
            Screen::Roster
        }
    }

    /// Replace the mirrored session state.
    ///
    /// Kits are re-rolled only when the draw itself changed, so an unrelated
    /// snapshot does not repaint the teams.
    pub fn apply_snapshot(&mut self, snapshot: SessionSnapshot) {
        self.players = snapshot.players;
        self.team_size = snapshot.team_size;
        self.selected = self.selected.min(self.players.len().saturating_sub(1));

        if snapshot.draw != self.draw {
            self.kits = match &snapshot.draw {
                Some(draw) => pick_kits(draw.group_count(), &mut rand::thread_rng()),
                None => Vec::new(),
            };
            self.teams_scroll = 0;
            self.draw = snapshot.draw;
        }

        self.notice = None;
    }

    /// Kit for group `index`, falling back to the plain kit.
    pub fn kit(&self, index: usize) -> Kit {
        if !self.show_kits {
            return kits::PLAIN_KIT;
        }
        self.kits.get(index).copied().unwrap_or(kits::PLAIN_KIT)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Snapshot(snapshot) => state.apply_snapshot(*snapshot),
        UiUpdate::Notice(text) => state.notice = Some(text),
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame for the current screen.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    match state.screen() {
        Screen::Roster => {
            widgets::team_size::render(frame, layout.header, state);
            widgets::roster::render(frame, layout.main_panel, state);
        }
        Screen::Teams => {
            widgets::teams::render_summary(frame, layout.header, state);
            widgets::teams::render(frame, layout.main_panel, state);
        }
    }
    widgets::action_bar::render(frame, layout.action_bar, state);
    widgets::help_bar::render(frame, layout.help_bar, state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Selects over UI updates, keyboard input, and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    ui: UiConfig,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(&ui);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(ui.tick_rate());
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => {
                        info!("App channel closed, leaving TUI");
                        break Ok(());
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            debug!("Sending {:?}", cmd);
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws.
                    }
                    Some(Err(e)) => break Err(anyhow::Error::new(e).context("terminal input error")),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::new(e).context("failed to draw frame"));
                }
            }
        }
    };

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bigode_core::draw_teams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn players(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{i}")).collect()
    }

    fn drawn(n: usize, size: usize) -> TeamDraw {
        let mut rng = StdRng::seed_from_u64(1);
        draw_teams(&players(n), TeamSize::new(size).unwrap(), &mut rng).unwrap()
    }

    fn snapshot(n: usize, draw: Option<TeamDraw>) -> SessionSnapshot {
        SessionSnapshot {
            players: players(n),
            team_size: TeamSize::new(2).unwrap(),
            draw,
        }
    }

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert_eq!(state.title, "Fut Bigode");
        assert!(state.players.is_empty());
        assert_eq!(state.team_size.get(), 5);
        assert!(state.draw.is_none());
        assert_eq!(state.screen(), Screen::Roster);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(!state.confirm_quit);
        assert!(state.notice.is_none());
    }

    #[test]
    fn snapshot_with_draw_switches_to_teams() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot(5, Some(drawn(5, 2))));
        assert_eq!(state.screen(), Screen::Teams);
        assert_eq!(state.kits.len(), 3);
        assert_eq!(state.team_size.get(), 2);
    }

    #[test]
    fn snapshot_without_draw_returns_to_roster() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot(5, Some(drawn(5, 2))));
        state.teams_scroll = 4;
        state.apply_snapshot(snapshot(5, None));
        assert_eq!(state.screen(), Screen::Roster);
        assert!(state.kits.is_empty());
        assert_eq!(state.teams_scroll, 0);
    }

    #[test]
    fn same_draw_keeps_kits() {
        let mut state = ViewState::default();
        let draw = drawn(6, 2);
        state.apply_snapshot(snapshot(6, Some(draw.clone())));
        let kits_before = state.kits.clone();
        state.teams_scroll = 2;
        state.apply_snapshot(snapshot(6, Some(draw)));
        assert_eq!(state.kits, kits_before);
        assert_eq!(state.teams_scroll, 2);
    }

    #[test]
    fn selection_clamped_after_removal() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot(3, None));
        state.selected = 2;
        state.apply_snapshot(snapshot(2, None));
        assert_eq!(state.selected, 1);
        state.apply_snapshot(snapshot(0, None));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn notice_update_and_clear() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Notice("nope".into()));
        assert_eq!(state.notice.as_deref(), Some("nope"));
        apply_ui_update(&mut state, UiUpdate::Snapshot(Box::new(snapshot(1, None))));
        assert!(state.notice.is_none());
    }

    #[test]
    fn kits_off_uses_plain_kit() {
        let ui = UiConfig {
            show_kits: false,
            ..UiConfig::default()
        };
        let mut state = ViewState::new(&ui);
        state.apply_snapshot(snapshot(4, Some(drawn(4, 2))));
        assert_eq!(state.kit(0), kits::PLAIN_KIT);
    }

    #[test]
    fn render_frame_both_screens() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot(5, None));
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();

        state.apply_snapshot(snapshot(5, Some(drawn(5, 2))));
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }
}
