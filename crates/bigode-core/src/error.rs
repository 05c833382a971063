// Error types for partitioning and session operations.

use thiserror::Error;

/// Failure to partition a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// The requested team size was below 1.
    #[error("invalid argument: team size must be at least 1, got {team_size}")]
    InvalidArgument { team_size: i64 },
}

/// Failure to apply an operation to a [`crate::Session`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("add at least one player before shuffling")]
    EmptyRoster,

    #[error("no player at position {index} (roster has {len})")]
    PlayerOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Partition(#[from] PartitionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_the_value() {
        let err = PartitionError::InvalidArgument { team_size: -3 };
        assert_eq!(
            err.to_string(),
            "invalid argument: team size must be at least 1, got -3"
        );
    }

    #[test]
    fn partition_error_converts_into_session_error() {
        let err: SessionError = PartitionError::InvalidArgument { team_size: 0 }.into();
        assert!(matches!(
            err,
            SessionError::Partition(PartitionError::InvalidArgument { team_size: 0 })
        ));
        // Transparent: the message is the inner one.
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn out_of_range_message() {
        let err = SessionError::PlayerOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "no player at position 4 (roster has 2)");
    }
}
