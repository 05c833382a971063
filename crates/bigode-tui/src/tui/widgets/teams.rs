// Teams widget: the drawn teams, each painted in its kit, followed by the
// substitutes group.

use bigode_core::TeamDraw;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::kits::Kit;
use crate::tui::ViewState;

/// Render the draw summary (counts and time) into the header area.
pub fn render_summary(frame: &mut Frame, area: Rect, state: &ViewState) {
    let text = state
        .draw
        .as_ref()
        .map(summary)
        .unwrap_or_else(|| "No draw yet".to_string());
    let paragraph = Paragraph::new(format!(" {text}"))
        .block(Block::default().borders(Borders::ALL).title("Draw"));
    frame.render_widget(paragraph, area);
}

/// Render every group of the current draw into the main panel.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let scroll = state.teams_scroll.min(max_scroll(state));
    let lines = team_lines(state);

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Teams"))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// Largest useful scroll offset: the last line stays visible.
pub fn max_scroll(state: &ViewState) -> usize {
    team_lines(state).len().saturating_sub(1)
}

/// One heading per group followed by its players, with a blank line between
/// groups.
pub fn team_lines(state: &ViewState) -> Vec<Line<'static>> {
    let Some(draw) = &state.draw else {
        return vec![Line::from("No teams drawn")];
    };

    let mut lines = Vec::new();
    for (index, group) in draw.groups().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        let kit = state.kit(index);
        lines.push(Line::from(Span::styled(
            group_heading(draw, index),
            Style::default().fg(kit.primary).add_modifier(Modifier::BOLD),
        )));
        for name in group {
            lines.push(player_line(name, kit));
        }
    }
    lines
}

/// "Team N" for primary teams, "Substitutes" for the remainder group.
pub fn group_heading(draw: &TeamDraw, index: usize) -> String {
    if index >= draw.teams.len() && draw.has_substitutes() {
        "Substitutes".to_string()
    } else {
        format!("Team {}", index + 1)
    }
}

/// E.g. "2 teams of 5 · 1 substitute · drawn at 20:14:05".
pub fn summary(draw: &TeamDraw) -> String {
    let teams = draw.teams.len();
    let mut text = format!(
        "{} {} of {}",
        teams,
        if teams == 1 { "team" } else { "teams" },
        draw.team_size
    );
    let subs = draw.substitutes.len();
    if subs > 0 {
        text.push_str(&format!(
            " · {} {}",
            subs,
            if subs == 1 { "substitute" } else { "substitutes" }
        ));
    }
    text.push_str(&format!(" · drawn at {}", draw.drawn_at.format("%H:%M:%S")));
    text
}

fn player_line(name: &str, kit: Kit) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        // Shirt swatch: body in the primary colour, trim in the secondary.
        Span::styled("▐", Style::default().fg(kit.secondary)),
        Span::styled("█", Style::default().fg(kit.primary)),
        Span::styled("▌", Style::default().fg(kit.secondary)),
        Span::raw(" "),
        Span::styled(
            name.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigode_core::{draw_teams, SessionSnapshot, TeamSize};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn drawn(n: usize, size: usize) -> TeamDraw {
        let players: Vec<String> = (1..=n).map(|i| format!("P{i}")).collect();
        draw_teams(&players, TeamSize::new(size).unwrap(), &mut StdRng::seed_from_u64(9)).unwrap()
    }

    fn state_with(draw: TeamDraw) -> ViewState {
        let mut state = ViewState::default();
        state.apply_snapshot(SessionSnapshot {
            players: Vec::new(),
            team_size: draw.team_size,
            draw: Some(draw),
        });
        state
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn headings_name_substitutes() {
        let draw = drawn(5, 2);
        assert_eq!(group_heading(&draw, 0), "Team 1");
        assert_eq!(group_heading(&draw, 1), "Team 2");
        assert_eq!(group_heading(&draw, 2), "Substitutes");
    }

    #[test]
    fn short_roster_heading_is_team() {
        let draw = drawn(3, 5);
        assert_eq!(group_heading(&draw, 0), "Team 1");
    }

    #[test]
    fn summary_mentions_counts() {
        let text = summary(&drawn(5, 2));
        assert!(text.starts_with("2 teams of 2 · 1 substitute · drawn at "));

        let text = summary(&drawn(4, 4));
        assert!(text.starts_with("1 team of 4 · drawn at "));
    }

    #[test]
    fn team_lines_lists_every_player() {
        let state = state_with(drawn(5, 2));
        let lines = team_lines(&state);
        // 3 headings + 5 players + 2 separators
        assert_eq!(lines.len(), 10);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        for i in 1..=5 {
            let name = format!("P{i}");
            assert_eq!(
                text.iter().filter(|l| l.ends_with(&format!(" {name}"))).count(),
                1,
                "{name} should appear once"
            );
        }
        assert!(text.contains(&"Substitutes".to_string()));
    }

    #[test]
    fn team_lines_without_draw() {
        let lines = team_lines(&ViewState::default());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn max_scroll_keeps_last_line() {
        // 3 headings + 5 players + 2 separators
        let state = state_with(drawn(5, 2));
        assert_eq!(max_scroll(&state), 9);
        assert_eq!(max_scroll(&ViewState::default()), 0);
    }

    #[test]
    fn render_does_not_panic_when_scrolled_past_end() {
        let backend = ratatui::backend::TestBackend::new(60, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = state_with(drawn(12, 3));
        state.teams_scroll = 500;
        terminal
            .draw(|frame| {
                render(frame, frame.area(), &state);
            })
            .unwrap();
    }
}
