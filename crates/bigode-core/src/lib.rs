// Library root: team partitioning, session state, and configuration shared
// by the terminal front end and integration tests.

pub mod config;
pub mod draw;
pub mod error;
pub mod partition;
pub mod roster;
pub mod session;

pub use draw::{draw_teams, TeamDraw};
pub use error::{PartitionError, SessionError};
pub use partition::{partition_into_teams, partition_with_rng, TeamSize};
pub use roster::Roster;
pub use session::{Session, SessionSnapshot};
