// Bigode entry point.
//
// Startup sequence:
// 1. Resolve the base directory (working dir or per-user config dir)
// 2. Initialize tracing into <base>/logs (never the terminal)
// 3. Load config (creating defaults on first run)
// 4. Create mpsc channels and spawn the app task
// 5. Run the TUI until the user quits
// 6. Give the app task a moment to wind down

use bigode_core::config;
use bigode_tui::{app, logging, tui};

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_dir = config::resolve_base_dir().context("failed to resolve base directory")?;
    logging::init(&base_dir)?;
    info!("Bigode starting up in {}", base_dir.display());

    let config = config::load_config_in(&base_dir).context("failed to load configuration")?;
    info!(
        "Config loaded: team_size={}, seed={:?}",
        config.draw.team_size, config.draw.seed
    );

    let ui_config = config.ui.clone();
    let app_state = app::AppState::new(config);

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(64);

    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // Blocks until the user quits.
    let tui_result = tui::run(ui_rx, cmd_tx, ui_config).await;
    if let Err(e) = &tui_result {
        error!("TUI error: {:#}", e);
    }

    // The TUI dropped its command sender, so the app loop ends on its own.
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), app_handle).await;

    info!("Bigode shut down cleanly");
    tui_result
}
