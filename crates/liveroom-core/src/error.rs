//! Error types for live session commands

use std::fmt;

use thiserror::Error;

use crate::{ParticipantId, SessionMode};

/// Why a participant cannot be the target of a role command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetIssue {
    /// Not currently present in the session
    NotPresent,
    /// Owners are outside promote/demote
    Owner,
    /// The local viewer cannot change their own role
    LocalViewer,
}

impl fmt::Display for TargetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            TargetIssue::NotPresent => "not present in session",
            TargetIssue::Owner => "is an owner",
            TargetIssue::LocalViewer => "is the local viewer",
        };
        f.write_str(reason)
    }
}

/// Live session errors
///
/// Every variant is a caller mistake surfaced synchronously. None of them is
/// transient and none should be retried unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiveError {
    #[error("Invalid mode: {0:?}")]
    InvalidMode(String),

    #[error("Invalid target: participant {participant} {reason}")]
    InvalidTarget {
        participant: ParticipantId,
        reason: TargetIssue,
    },

    #[error("Cannot follow self: participant {0}")]
    SelfFollow(ParticipantId),

    #[error("Role commands are not accepted in {mode} mode")]
    ModeMismatch { mode: SessionMode },
}

impl LiveError {
    pub fn invalid_target(participant: ParticipantId, reason: TargetIssue) -> Self {
        LiveError::InvalidTarget {
            participant,
            reason,
        }
    }
}

/// Result type for live session operations
pub type LiveResult<T> = Result<T, LiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LiveError::invalid_target(ParticipantId::new(3), TargetIssue::Owner);
        assert_eq!(err.to_string(), "Invalid target: participant 3 is an owner");

        let err = LiveError::ModeMismatch {
            mode: SessionMode::Open,
        };
        assert_eq!(err.to_string(), "Role commands are not accepted in open mode");

        let err = LiveError::InvalidMode("lecture".into());
        assert_eq!(err.to_string(), "Invalid mode: \"lecture\"");
    }
}
