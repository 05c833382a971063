// TUI widget modules, one per screen zone.

pub mod action_bar;
pub mod help_bar;
pub mod roster;
pub mod status_bar;
pub mod team_size;
pub mod teams;
