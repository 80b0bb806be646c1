//! Panel projection - what the live panel shows and offers
//!
//! Turns a session snapshot into sections and per-row actions. Rendering
//! belongs to the embedding UI; this only decides which rows exist, which
//! role each row displays and which commands a row may trigger.

use liveroom_core::{Participant, ParticipantId, Role, SessionMode};

use crate::LiveSession;

const CLASSROOM_HINT: &str = "In Classroom Mode, you have control over who can edit";
const INVITE_HINT: &str = "No other users in session, invite them!";

/// Command a panel row may trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelAction {
    /// Promote a spectator
    MakeEditor,
    /// Demote an editor
    MakeSpectator,
    Follow,
    Unfollow,
}

/// One participant row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub participant: Participant,
    /// Role shown on the row, which in Open mode is Editor for every non-owner
    pub role: Role,
    /// Row of the local viewer
    pub is_local: bool,
    pub actions: Vec<PanelAction>,
}

impl PanelEntry {
    fn build(session: &LiveSession, participant: &Participant, role: Role) -> Self {
        let is_local = participant.id == session.local_viewer();
        let manages = session.records().is_owner(session.local_viewer());
        let mut actions = Vec::new();

        if manages && !is_local && session.mode() == SessionMode::Classroom {
            match role {
                Role::Spectator => actions.push(PanelAction::MakeEditor),
                Role::Editor => actions.push(PanelAction::MakeSpectator),
                Role::Owner => {}
            }
        }

        if !is_local {
            if session.follow_target() == Some(participant.id) {
                actions.push(PanelAction::Unfollow);
            } else {
                actions.push(PanelAction::Follow);
            }
        }

        Self {
            participant: participant.clone(),
            role,
            is_local,
            actions,
        }
    }

    /// Muted subtitle: "Owner", "(you)", "Owner (you)" or empty
    pub fn label(&self) -> String {
        match (self.role == Role::Owner, self.is_local) {
            (true, true) => "Owner (you)".to_string(),
            (true, false) => "Owner".to_string(),
            (false, true) => "(you)".to_string(),
            (false, false) => String::new(),
        }
    }

    pub fn offers(&self, action: PanelAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Panel sections for one session snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub mode: SessionMode,
    /// Owners, recorded editors, then in Open mode everyone else
    pub editors_section: Vec<PanelEntry>,
    /// Spectators; only exists in Classroom mode
    pub viewers_section: Option<Vec<PanelEntry>>,
    pub follow_target: Option<ParticipantId>,
}

impl PanelView {
    pub fn build(session: &LiveSession) -> Self {
        let groups = session.groups();
        let mode = session.mode();

        let mut editors_section: Vec<PanelEntry> = groups
            .owners
            .iter()
            .map(|p| PanelEntry::build(session, p, Role::Owner))
            .chain(
                groups
                    .editors
                    .iter()
                    .map(|p| PanelEntry::build(session, p, Role::Editor)),
            )
            .collect();

        let viewers_section = match mode {
            SessionMode::Open => {
                editors_section.extend(
                    groups
                        .spectators
                        .iter()
                        .map(|p| PanelEntry::build(session, p, Role::Editor)),
                );
                None
            }
            SessionMode::Classroom => Some(
                groups
                    .spectators
                    .iter()
                    .map(|p| PanelEntry::build(session, p, Role::Spectator))
                    .collect(),
            ),
        };

        Self {
            mode,
            editors_section,
            viewers_section,
            follow_target: session.follow_target(),
        }
    }

    /// Text under the mode selector
    pub fn mode_hint(&self) -> Option<&'static str> {
        match self.mode {
            SessionMode::Open => None,
            SessionMode::Classroom => Some(CLASSROOM_HINT),
        }
    }

    /// Text in an empty viewers section
    pub fn invite_hint(&self) -> Option<&'static str> {
        match &self.viewers_section {
            Some(viewers) if viewers.is_empty() => Some(INVITE_HINT),
            _ => None,
        }
    }

    /// Row for a participant, in whichever section it is
    pub fn entry(&self, id: ParticipantId) -> Option<&PanelEntry> {
        self.editors_section
            .iter()
            .chain(self.viewers_section.iter().flatten())
            .find(|entry| entry.participant.id == id)
    }
}
