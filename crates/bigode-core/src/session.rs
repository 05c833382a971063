// Session state: the roster being built, the chosen team size, and the most
// recent draw.
//
// Nothing here is derived automatically. Changing the roster or the team
// size discards the current draw; a new one is only produced by an explicit
// `shuffle()`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::draw::{draw_teams, TeamDraw};
use crate::error::SessionError;
use crate::partition::TeamSize;
use crate::roster::Roster;

/// Render-ready copy of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub players: Vec<String>,
    pub team_size: TeamSize,
    pub draw: Option<TeamDraw>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        SessionSnapshot {
            players: Vec::new(),
            team_size: TeamSize::default(),
            draw: None,
        }
    }
}

pub struct Session<R = StdRng> {
    roster: Roster,
    team_size: TeamSize,
    draw: Option<TeamDraw>,
    rng: R,
}

impl Session<StdRng> {
    /// Create an empty session. A `seed` makes every draw reproducible.
    pub fn new(team_size: TeamSize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Using fixed shuffle seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Session::with_rng(team_size, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(team_size: TeamSize, rng: R) -> Self {
        Session {
            roster: Roster::new(),
            team_size,
            draw: None,
            rng,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn team_size(&self) -> TeamSize {
        self.team_size
    }

    pub fn draw(&self) -> Option<&TeamDraw> {
        self.draw.as_ref()
    }

    pub fn add_player(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("Adding player {:?}", name);
        self.roster.push(name);
        self.invalidate();
    }

    pub fn rename_player(&mut self, index: usize, name: impl Into<String>) -> Result<(), SessionError> {
        self.roster.rename(index, name)?;
        self.invalidate();
        Ok(())
    }

    pub fn remove_player(&mut self, index: usize) -> Result<String, SessionError> {
        let removed = self.roster.remove(index)?;
        debug!("Removed player {:?}", removed);
        self.invalidate();
        Ok(removed)
    }

    pub fn set_team_size(&mut self, team_size: TeamSize) {
        if team_size != self.team_size {
            self.team_size = team_size;
            self.invalidate();
        }
    }

    pub fn increment_team_size(&mut self) -> TeamSize {
        self.set_team_size(self.team_size.increment());
        self.team_size
    }

    /// Shrink the team size by one. Stays at 1 once there.
    pub fn decrement_team_size(&mut self) -> TeamSize {
        self.set_team_size(self.team_size.decrement());
        self.team_size
    }

    /// Shuffle the roster into teams and keep the result.
    pub fn shuffle(&mut self) -> Result<&TeamDraw, SessionError> {
        if self.roster.is_empty() {
            return Err(SessionError::EmptyRoster);
        }
        let draw = draw_teams(self.roster.names(), self.team_size, &mut self.rng)?;
        Ok(&*self.draw.insert(draw))
    }

    /// Drop the current draw and go back to editing. Roster and team size
    /// are kept.
    pub fn restart(&mut self) {
        if self.draw.take().is_some() {
            info!("Draw discarded, back to roster");
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self.roster.names().to_vec(),
            team_size: self.team_size,
            draw: self.draw.clone(),
        }
    }

    fn invalidate(&mut self) {
        self.draw = None;
    }
}
