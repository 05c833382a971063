// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// orchestrator, or into local ViewState changes (selection, text entry,
// scrolling).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::widgets::teams;
use super::ViewState;
use crate::protocol::{Screen, UserCommand};

/// What typed characters currently go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are shortcuts.
    Normal,
    /// Typing a new player's name. Enter submits and keeps the mode open.
    Adding,
    /// Typing a replacement name for the player at this index.
    Editing(usize),
}

/// Notice shown when shuffling is attempted with nobody on the roster.
pub const EMPTY_ROSTER_NOTICE: &str = "Add at least one player before shuffling";

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator, `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only react to presses; some platforms also report releases.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits, whatever the mode.
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    match view_state.input_mode {
        InputMode::Adding => return handle_adding(key_event, view_state),
        InputMode::Editing(index) => return handle_editing(key_event, index, view_state),
        InputMode::Normal => {}
    }

    if key_event.code == KeyCode::Char('q') {
        view_state.confirm_quit = true;
        return None;
    }

    match view_state.screen() {
        Screen::Roster => handle_roster_key(key_event, view_state),
        Screen::Teams => handle_teams_key(key_event, view_state),
    }
}

/// `y`/`q` confirm, `n`/Esc cancel, everything else is ignored.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

fn handle_adding(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.input_mode = InputMode::Normal;
            view_state.input_buffer.clear();
            None
        }
        KeyCode::Enter => {
            // Blank names are not submitted; the buffer is kept for editing.
            if view_state.input_buffer.trim().is_empty() {
                return None;
            }
            let name = std::mem::take(&mut view_state.input_buffer);
            Some(UserCommand::AddPlayer(name))
        }
        _ => {
            edit_buffer(key_event.code, view_state);
            None
        }
    }
}

fn handle_editing(key_event: KeyEvent, index: usize, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.input_mode = InputMode::Normal;
            view_state.input_buffer.clear();
            None
        }
        KeyCode::Enter => {
            view_state.input_mode = InputMode::Normal;
            let name = std::mem::take(&mut view_state.input_buffer);
            Some(UserCommand::RenamePlayer { index, name })
        }
        _ => {
            edit_buffer(key_event.code, view_state);
            None
        }
    }
}

fn edit_buffer(code: KeyCode, view_state: &mut ViewState) {
    match code {
        KeyCode::Backspace => {
            view_state.input_buffer.pop();
        }
        KeyCode::Char(c) => view_state.input_buffer.push(c),
        _ => {}
    }
}

fn handle_roster_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let has_players = !view_state.players.is_empty();

    match key_event.code {
        KeyCode::Char('a') | KeyCode::Insert => {
            view_state.input_mode = InputMode::Adding;
            view_state.input_buffer.clear();
            None
        }
        KeyCode::Char('e') | KeyCode::Enter if has_players => {
            let index = view_state.selected;
            view_state.input_buffer = view_state.players[index].clone();
            view_state.input_mode = InputMode::Editing(index);
            None
        }
        KeyCode::Char('d') | KeyCode::Delete if has_players => {
            Some(UserCommand::RemovePlayer(view_state.selected))
        }

        KeyCode::Up | KeyCode::Char('k') => {
            view_state.selected = view_state.selected.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if view_state.selected + 1 < view_state.players.len() {
                view_state.selected += 1;
            }
            None
        }

        KeyCode::Char('+') | KeyCode::Char('=') => Some(UserCommand::IncrementTeamSize),
        KeyCode::Char('-') => Some(UserCommand::DecrementTeamSize),

        KeyCode::Char('s') => {
            if has_players {
                Some(UserCommand::Shuffle)
            } else {
                view_state.notice = Some(EMPTY_ROSTER_NOTICE.to_string());
                None
            }
        }

        KeyCode::Esc => {
            view_state.notice = None;
            None
        }

        _ => None,
    }
}

fn handle_teams_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('r') => Some(UserCommand::Restart),
        KeyCode::Char('s') => Some(UserCommand::Shuffle),
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.teams_scroll = view_state.teams_scroll.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let next = view_state.teams_scroll.saturating_add(1);
            view_state.teams_scroll = next.min(teams::max_scroll(view_state));
            None
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
