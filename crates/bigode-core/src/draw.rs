// A labelled draw: primary teams plus the optional substitutes group.

use chrono::{DateTime, Local};
use rand::Rng;
use tracing::info;

use crate::error::PartitionError;
use crate::partition::{partition_with_rng, TeamSize};

/// Outcome of one shuffle over a roster.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDraw {
    /// Primary teams, in draw order.
    pub teams: Vec<Vec<String>>,
    /// Remainder players. Empty when the roster divides evenly or is
    /// smaller than a single team.
    pub substitutes: Vec<String>,
    pub team_size: TeamSize,
    pub drawn_at: DateTime<Local>,
}

impl TeamDraw {
    /// Teams followed by the substitutes group, if any. This is the raw
    /// partition output.
    pub fn groups(&self) -> impl Iterator<Item = &Vec<String>> {
        self.teams
            .iter()
            .chain(Some(&self.substitutes).filter(|subs| !subs.is_empty()))
    }

    pub fn group_count(&self) -> usize {
        self.teams.len() + usize::from(self.has_substitutes())
    }

    pub fn has_substitutes(&self) -> bool {
        !self.substitutes.is_empty()
    }

    /// Number of players across every group.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Vec::len).sum::<usize>() + self.substitutes.len()
    }
}

/// Shuffle `roster` and split it into a [`TeamDraw`].
///
/// The trailing group is treated as substitutes only when the roster fills
/// at least one team and leaves a remainder.
pub fn draw_teams<R>(roster: &[String], team_size: TeamSize, rng: &mut R) -> Result<TeamDraw, PartitionError>
where
    R: Rng + ?Sized,
{
    let mut teams = partition_with_rng(roster, team_size.get(), rng)?;

    let size = team_size.get();
    let has_remainder = roster.len() >= size && roster.len() % size != 0;
    let substitutes = if has_remainder {
        teams.pop().unwrap_or_default()
    } else {
        Vec::new()
    };

    info!(
        "Drew {} team(s) of {} from {} player(s), {} substitute(s)",
        teams.len(),
        size,
        roster.len(),
        substitutes.len()
    );

    Ok(TeamDraw {
        teams,
        substitutes,
        team_size,
        drawn_at: Local::now(),
    })
}
