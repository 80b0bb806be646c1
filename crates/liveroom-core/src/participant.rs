//! Participants and their derived roles

use std::cmp::Ordering;
use std::fmt;

use crate::ParticipantId;

/// A person present in the live session
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Participant {
    /// Opaque identity
    pub id: ParticipantId,
    /// Display name (username)
    pub name: String,
}

impl Participant {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Participant {
            id: ParticipantId::new(id),
            name: name.into(),
        }
    }

    /// Display ordering: byte-wise name, then id to keep equal names stable
    pub fn display_order(&self, other: &Participant) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Role of a participant.
///
/// Never stored; always derived from the session's mode and id records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Unrestricted control, fixed at session creation
    Owner,
    /// May edit
    Editor,
    /// View only
    Spectator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Editor => "editor",
            Role::Spectator => "spectator",
        }
    }

    /// Check if this role may modify the document
    #[inline]
    pub fn can_edit(self) -> bool {
        !matches!(self, Role::Spectator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
