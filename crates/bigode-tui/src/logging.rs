// File logging. The terminal belongs to the TUI, so every tracing event goes
// to `<base_dir>/logs/bigode.log`, next to the config it was started with.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "bigode.log";
const DEFAULT_FILTER: &str = "bigode=info,bigode_core=info,bigode_tui=info,warn";

/// Where the log for a given base directory lives.
pub fn log_path(base_dir: &Path) -> PathBuf {
    base_dir.join("logs").join(LOG_FILE)
}

/// Create (truncate) the log file, making its directory if needed.
pub fn open_log_file(base_dir: &Path) -> anyhow::Result<File> {
    let path = log_path(base_dir);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    File::create(&path).with_context(|| format!("failed to create log file {}", path.display()))
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(base_dir: &Path) -> anyhow::Result<()> {
    let log_file = open_log_file(base_dir)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")
}
