// Help bar: key hints for the current screen and mode.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::Screen;
use crate::tui::input::InputMode;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let style = if state.confirm_quit {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::DIM)
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(hint_text(state), style)))
        .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Hints for whatever the keyboard currently controls.
pub fn hint_text(state: &ViewState) -> &'static str {
    if state.confirm_quit {
        return " Quit? y:Yes | n:No";
    }
    match (state.screen(), state.input_mode) {
        (Screen::Roster, InputMode::Adding) => " Enter:Add | Esc:Done | Backspace:Delete char",
        (Screen::Roster, InputMode::Editing(_)) => " Enter:Save | Esc:Cancel | Backspace:Delete char",
        (Screen::Roster, InputMode::Normal) => {
            " a:Add | e:Edit | d:Remove | j/k:Select | +/-:Team size | s:Shuffle | q:Quit"
        }
        (Screen::Teams, _) => " r:Re-shuffle | s:Draw again | j/k:Scroll | q:Quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_prompt_takes_priority() {
        let mut state = ViewState::default();
        state.input_mode = InputMode::Adding;
        state.confirm_quit = true;
        assert_eq!(hint_text(&state), " Quit? y:Yes | n:No");
    }

    #[test]
    fn hints_follow_mode() {
        let mut state = ViewState::default();
        assert!(hint_text(&state).contains("s:Shuffle"));
        state.input_mode = InputMode::Editing(0);
        assert!(hint_text(&state).contains("Enter:Save"));
    }
}
