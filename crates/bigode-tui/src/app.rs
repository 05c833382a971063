// Application state and orchestration logic.
//
// Owns the session (roster, team size, current draw), applies commands sent
// by the TUI, and pushes a fresh snapshot back after every change. Rejected
// commands come back as a notice instead.

use bigode_core::config::Config;
use bigode_core::{Session, SessionError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::protocol::{UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub session: Session,
}

impl AppState {
    /// Create a state with an empty roster, seeded from the config.
    pub fn new(config: Config) -> Self {
        let session = Session::new(config.draw.team_size, config.draw.seed);
        AppState { config, session }
    }

    /// Apply a single command to the session.
    ///
    /// `Quit` is handled by the event loop and is a no-op here.
    pub fn apply_command(&mut self, cmd: UserCommand) -> Result<(), SessionError> {
        match cmd {
            UserCommand::AddPlayer(name) => {
                let name = name.trim();
                if name.is_empty() {
                    debug!("Ignoring blank player name");
                } else {
                    self.session.add_player(name);
                }
            }
            UserCommand::RenamePlayer { index, name } => {
                self.session.rename_player(index, name.trim())?;
            }
            UserCommand::RemovePlayer(index) => {
                self.session.remove_player(index)?;
            }
            UserCommand::IncrementTeamSize => {
                let size = self.session.increment_team_size();
                debug!("Team size now {}", size);
            }
            UserCommand::DecrementTeamSize => {
                let size = self.session.decrement_team_size();
                debug!("Team size now {}", size);
            }
            UserCommand::Shuffle => {
                self.session.shuffle()?;
            }
            UserCommand::Restart => {
                self.session.restart();
            }
            UserCommand::Quit => {}
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the app orchestrator until `Quit` arrives or the command channel
/// closes.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let _ = ui_tx
        .send(UiUpdate::Snapshot(Box::new(state.session.snapshot())))
        .await;

    while let Some(cmd) = cmd_rx.recv().await {
        if cmd == UserCommand::Quit {
            info!("Quit requested");
            break;
        }

        debug!("Handling {:?}", cmd);
        let update = match state.apply_command(cmd) {
            Ok(()) => UiUpdate::Snapshot(Box::new(state.session.snapshot())),
            Err(e) => {
                warn!("Command rejected: {}", e);
                UiUpdate::Notice(e.to_string())
            }
        };

        if ui_tx.send(update).await.is_err() {
            info!("UI channel closed, shutting down");
            break;
        }
    }

    info!("Application event loop finished");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bigode_core::config::DrawConfig;
    use bigode_core::TeamSize;

    fn create_test_app_state(team_size: usize) -> AppState {
        let mut config = Config::default();
        config.draw = DrawConfig {
            team_size: TeamSize::new(team_size).unwrap(),
            seed: Some(7),
        };
        AppState::new(config)
    }

    fn add(state: &mut AppState, names: &[&str]) {
        for name in names {
            state
                .apply_command(UserCommand::AddPlayer(name.to_string()))
                .unwrap();
        }
    }

    #[test]
    fn new_state_uses_configured_team_size() {
        let state = create_test_app_state(4);
        assert_eq!(state.session.team_size().get(), 4);
        assert!(state.session.roster().is_empty());
    }

    #[test]
    fn add_player_trims_and_ignores_blank() {
        let mut state = create_test_app_state(2);
        add(&mut state, &["  Sócrates ", "   ", ""]);
        assert_eq!(state.session.roster().names(), &["Sócrates".to_string()]);
    }

    #[test]
    fn rename_and_remove() {
        let mut state = create_test_app_state(2);
        add(&mut state, &["A", "B"]);
        state
            .apply_command(UserCommand::RenamePlayer {
                index: 0,
                name: "Zico".into(),
            })
            .unwrap();
        state.apply_command(UserCommand::RemovePlayer(1)).unwrap();
        assert_eq!(state.session.roster().names(), &["Zico".to_string()]);
    }

    #[test]
    fn remove_out_of_range_is_error() {
        let mut state = create_test_app_state(2);
        let err = state.apply_command(UserCommand::RemovePlayer(0)).unwrap_err();
        assert_eq!(err, SessionError::PlayerOutOfRange { index: 0, len: 0 });
    }

    #[test]
    fn team_size_commands_floor_at_one() {
        let mut state = create_test_app_state(1);
        state.apply_command(UserCommand::DecrementTeamSize).unwrap();
        assert_eq!(state.session.team_size().get(), 1);
        state.apply_command(UserCommand::IncrementTeamSize).unwrap();
        assert_eq!(state.session.team_size().get(), 2);
    }

    #[test]
    fn shuffle_then_restart() {
        let mut state = create_test_app_state(2);
        add(&mut state, &["A", "B", "C", "D", "E"]);
        state.apply_command(UserCommand::Shuffle).unwrap();
        let draw = state.session.draw().expect("draw should exist");
        assert_eq!(draw.teams.len(), 2);
        assert_eq!(draw.substitutes.len(), 1);

        state.apply_command(UserCommand::Restart).unwrap();
        assert!(state.session.draw().is_none());
        assert_eq!(state.session.roster().len(), 5);
    }

    #[test]
    fn shuffle_empty_roster_is_error() {
        let mut state = create_test_app_state(2);
        let err = state.apply_command(UserCommand::Shuffle).unwrap_err();
        assert_eq!(err, SessionError::EmptyRoster);
    }

    #[tokio::test]
    async fn run_sends_initial_snapshot_and_stops_on_quit() {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(8);
        let state = create_test_app_state(3);

        let handle = tokio::spawn(run(cmd_rx, ui_tx, state));

        match ui_rx.recv().await {
            Some(UiUpdate::Snapshot(snap)) => {
                assert!(snap.players.is_empty());
                assert_eq!(snap.team_size.get(), 3);
            }
            other => panic!("expected initial snapshot, got {:?}", other),
        }

        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn run_reports_rejected_command_as_notice() {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(8);
        let handle = tokio::spawn(run(cmd_rx, ui_tx, create_test_app_state(3)));

        let _initial = ui_rx.recv().await;
        cmd_tx.send(UserCommand::Shuffle).await.unwrap();

        match ui_rx.recv().await {
            Some(UiUpdate::Notice(text)) => assert!(text.contains("at least one player")),
            other => panic!("expected notice, got {:?}", other),
        }

        drop(cmd_tx);
        handle.await.unwrap().unwrap();
    }
}
