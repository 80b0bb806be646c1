//! Inbound events and user commands

use liveroom_core::{LiveResult, Participant, ParticipantId, SessionMode};
use liveroom_roles::{LiveSession, PanelAction};

/// Presence feed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceEvent {
    Joined(Participant),
    Left(ParticipantId),
}

/// User command from the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetMode(SessionMode),
    Promote(ParticipantId),
    Demote(ParticipantId),
    Follow(Option<ParticipantId>),
}

impl Command {
    /// Parse a mode change as submitted by the mode selector
    pub fn set_mode_from_str(mode: &str) -> LiveResult<Self> {
        Ok(Command::SetMode(mode.parse()?))
    }

    /// Command behind a panel row action
    pub fn from_action(action: PanelAction, target: ParticipantId) -> Self {
        match action {
            PanelAction::MakeEditor => Command::Promote(target),
            PanelAction::MakeSpectator => Command::Demote(target),
            PanelAction::Follow => Command::Follow(Some(target)),
            PanelAction::Unfollow => Command::Follow(None),
        }
    }

    /// Apply to a session. Returns true if the session changed.
    pub fn apply(self, session: &mut LiveSession) -> LiveResult<bool> {
        match self {
            Command::SetMode(mode) => Ok(session.set_mode(mode)),
            Command::Promote(id) => session.promote(id),
            Command::Demote(id) => session.demote(id),
            Command::Follow(target) => {
                let changed = session.follow_target() != target;
                session.follow(target)?;
                Ok(changed)
            }
        }
    }
}

impl PresenceEvent {
    /// Apply to a session. Returns true if presence changed.
    pub fn apply(self, session: &mut LiveSession) -> bool {
        match self {
            PresenceEvent::Joined(participant) => session.join(participant),
            PresenceEvent::Left(id) => session.leave(id).is_some(),
        }
    }
}
