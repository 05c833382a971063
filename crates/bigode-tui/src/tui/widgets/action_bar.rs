// Action bar: the name input while typing, otherwise the screen's main
// action (shuffle or re-shuffle).

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::protocol::Screen;
use crate::tui::input::InputMode;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (title, line) = match (state.screen(), state.input_mode) {
        (Screen::Roster, InputMode::Adding) => (
            format!("New player {}", state.players.len() + 1),
            input_line(&state.input_buffer, "Player name"),
        ),
        (Screen::Roster, InputMode::Editing(index)) => (
            format!("Edit player {}", index + 1),
            input_line(&state.input_buffer, "name"),
        ),
        (Screen::Roster, InputMode::Normal) => (
            "Action".to_string(),
            action_line("s", "Shuffle teams", !state.players.is_empty()),
        ),
        (Screen::Teams, _) => ("Action".to_string(), action_line("r", "Re-shuffle", true)),
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

/// Typed text followed by a cursor block, or a dimmed placeholder.
fn input_line(buffer: &str, placeholder: &str) -> Line<'static> {
    if buffer.is_empty() {
        Line::from(vec![
            Span::styled(" ", Style::default().bg(Color::White)),
            Span::styled(format!(" {placeholder}"), Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(buffer.to_string()),
            Span::styled(" ", Style::default().bg(Color::White)),
        ])
    }
}

/// Button-like hint. Disabled actions are dimmed.
fn action_line(key: &str, label: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(Span::styled(format!(" [{key}] {label} "), style))
}
