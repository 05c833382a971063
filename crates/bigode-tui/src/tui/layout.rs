// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Header (3 rows): team size / draw summary         |
// +--------------------------------------------------+
// | Main Panel (fill): roster list / drawn teams      |
// +--------------------------------------------------+
// | Action Bar (3 rows): name input / main action     |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub status_bar: Rect,
    /// Team-size stepper on the roster screen, draw summary on the teams
    /// screen.
    pub header: Rect,
    pub main_panel: Rect,
    /// Name input while typing, otherwise the screen's primary action.
    pub action_bar: Rect,
    pub help_bar: Rect,
}

/// Build the layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(3), // header
            Constraint::Min(3),    // main panel
            Constraint::Length(3), // action bar
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        header: vertical[1],
        main_panel: vertical[2],
        action_bar: vertical[3],
        help_bar: vertical[4],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
