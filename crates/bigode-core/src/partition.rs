// Randomized roster partitioning.
//
// A roster is shuffled uniformly, then dealt round-robin into
// `len / team_size` teams. Whatever does not divide evenly goes into one
// trailing substitutes group.

use std::fmt;
use std::num::NonZeroUsize;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PartitionError;

/// Team size used when nothing else is configured.
pub const DEFAULT_TEAM_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// TeamSize
// ---------------------------------------------------------------------------

/// Maximum number of primary members per team. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamSize(NonZeroUsize);

impl TeamSize {
    pub const MIN: TeamSize = TeamSize(NonZeroUsize::MIN);

    /// Validate a raw team size.
    pub fn new(team_size: usize) -> Result<Self, PartitionError> {
        NonZeroUsize::new(team_size)
            .map(TeamSize)
            .ok_or(PartitionError::InvalidArgument { team_size: 0 })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// One more member per team.
    pub fn increment(self) -> Self {
        TeamSize(self.0.saturating_add(1))
    }

    /// One fewer member per team, never going below 1.
    pub fn decrement(self) -> Self {
        NonZeroUsize::new(self.get() - 1).map_or(self, TeamSize)
    }
}

impl Default for TeamSize {
    fn default() -> Self {
        TeamSize(NonZeroUsize::new(DEFAULT_TEAM_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for TeamSize {
    type Error = PartitionError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        TeamSize::new(value)
    }
}

impl TryFrom<i64> for TeamSize {
    type Error = PartitionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(TeamSize)
            .ok_or(PartitionError::InvalidArgument { team_size: value })
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Partitioning
// ---------------------------------------------------------------------------

/// Split `players` into randomly composed teams of `team_size`.
///
/// Uses the thread-local RNG. See [`partition_with_rng`] for the exact
/// grouping rules.
pub fn partition_into_teams(
    players: &[String],
    team_size: usize,
) -> Result<Vec<Vec<String>>, PartitionError> {
    partition_with_rng(players, team_size, &mut rand::thread_rng())
}

/// Shuffle `roster` with `rng` and deal it into groups.
///
/// - An empty roster yields no groups.
/// - A roster shorter than one team yields a single group holding everyone.
/// - Otherwise there are `len / team_size` teams filled round-robin, plus one
///   trailing substitutes group with the last `len % team_size` players of
///   the shuffled order when that remainder is non-zero.
///
/// Every input element ends up in exactly one group.
pub fn partition_with_rng<T, R>(
    roster: &[T],
    team_size: usize,
    rng: &mut R,
) -> Result<Vec<Vec<T>>, PartitionError>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let team_size = TeamSize::new(team_size)?.get();

    let mut shuffled = roster.to_vec();
    shuffled.shuffle(rng);

    let total = shuffled.len();
    let number_of_teams = total / team_size;
    let substitutes = total % team_size;

    if total == 0 {
        return Ok(Vec::new());
    }
    if number_of_teams == 0 {
        return Ok(vec![shuffled]);
    }

    let group_count = number_of_teams + usize::from(substitutes > 0);
    let mut groups: Vec<Vec<T>> = (0..group_count)
        .map(|_| Vec::with_capacity(team_size))
        .collect();

    let first_substitute = total - substitutes;
    for (index, player) in shuffled.into_iter().enumerate() {
        let group = if index >= first_substitute {
            number_of_teams
        } else {
            index % number_of_teams
        };
        groups[group].push(player);
    }

    Ok(groups)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
