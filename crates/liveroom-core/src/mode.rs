//! Session mode - who may edit by default
//!
//! The presentation layer submits modes as the strings `"open"` and
//! `"classroom"`. Anything else is rejected at the parse boundary so the
//! rest of the system only ever sees the closed enum.

use std::fmt;
use std::str::FromStr;

use crate::LiveError;

/// Access mode of a live session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SessionMode {
    /// Everyone can edit
    #[default]
    Open,
    /// Owners control who can edit
    Classroom,
}

impl SessionMode {
    /// All modes, in the order they are offered to the user
    pub const ALL: [SessionMode; 2] = [SessionMode::Open, SessionMode::Classroom];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionMode::Open => "open",
            SessionMode::Classroom => "classroom",
        }
    }

    /// Human readable option label
    pub fn label(self) -> &'static str {
        match self {
            SessionMode::Open => "Everyone can edit",
            SessionMode::Classroom => "Classroom mode",
        }
    }

    /// Does this mode distinguish editors from spectators?
    #[inline]
    pub fn enforces_spectators(self) -> bool {
        matches!(self, SessionMode::Classroom)
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionMode {
    type Err = LiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(SessionMode::Open),
            "classroom" => Ok(SessionMode::Classroom),
            other => Err(LiveError::InvalidMode(other.to_string())),
        }
    }
}
