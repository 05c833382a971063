// Team size stepper shown above the roster.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let button = Style::default().fg(Color::Black).bg(Color::Cyan);
    let at_minimum = state.team_size.get() == 1;

    let line = Line::from(vec![
        Span::raw(" Players per team  "),
        Span::styled(
            " - ",
            if at_minimum {
                button.add_modifier(Modifier::DIM)
            } else {
                button
            },
        ),
        Span::styled(
            format!(" {} ", state.team_size),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" + ", button),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Team size"));
    frame.render_widget(paragraph, area);
}
