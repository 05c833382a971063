// Status bar widget: title, screen indicator, roster count, last notice.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::Screen;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [title] [screen] | [player count] | [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.title),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", screen_label(state.screen())),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", Style::default().fg(Color::Gray)),
        Span::styled(player_count(state.players.len()), Style::default().fg(Color::White)),
    ];

    if let Some(notice) = &state.notice {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

pub fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Roster => "Roster",
        Screen::Teams => "Teams",
    }
}

/// "1 player" / "N players".
pub fn player_count(count: usize) -> String {
    if count == 1 {
        "1 player".to_string()
    } else {
        format!("{count} players")
    }
}
