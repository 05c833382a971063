// Library root: re-exports all modules so integration tests can drive the
// app orchestrator and the TUI state directly.

pub mod app;
pub mod logging;
pub mod protocol;
pub mod tui;
