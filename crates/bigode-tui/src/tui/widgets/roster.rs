// Roster widget: numbered list of entered players with the selection
// highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::tui::input::InputMode;
use crate::tui::ViewState;

/// Render the roster list into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let items: Vec<ListItem> = if state.players.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  No players yet. Press a to add one.",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        state
            .players
            .iter()
            .enumerate()
            .map(|(index, name)| ListItem::new(player_line(index, name, state)))
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Players"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.players.is_empty() {
        list_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn player_line<'a>(index: usize, name: &'a str, state: &ViewState) -> Line<'a> {
    let editing = state.input_mode == InputMode::Editing(index);
    let name_span = if editing {
        Span::styled("(editing)", Style::default().fg(Color::Yellow))
    } else if name.is_empty() {
        Span::styled("(no name)", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(name)
    };

    Line::from(vec![
        Span::styled(player_label(index), Style::default().fg(Color::Gray)),
        name_span,
    ])
}

/// "Player 1   " style label, padded so names line up.
pub fn player_label(index: usize) -> String {
    format!("{:<11}", format!("Player {}", index + 1))
}
