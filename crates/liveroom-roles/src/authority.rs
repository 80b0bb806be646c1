//! Role records - who the session store lists as owner or editor
//!
//! Records are independent of presence and of mode. A participant who leaves
//! keeps their record, so an owner reconnecting is still an owner and an
//! editor promoted in Classroom mode is still an editor after a detour
//! through Open mode.

use liveroom_core::{ParticipantId, SessionMode};
use std::collections::HashSet;

/// Owner and editor records for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRecords {
    owners: HashSet<ParticipantId>,
    editors: HashSet<ParticipantId>,
}

impl RoleRecords {
    /// Create empty records
    pub fn new() -> Self {
        Self::default()
    }

    /// Create records from the store's owner and editor lists
    pub fn with_ids(
        owners: impl IntoIterator<Item = ParticipantId>,
        editors: impl IntoIterator<Item = ParticipantId>,
    ) -> Self {
        Self {
            owners: owners.into_iter().collect(),
            editors: editors.into_iter().collect(),
        }
    }

    #[inline]
    pub fn is_owner(&self, id: ParticipantId) -> bool {
        self.owners.contains(&id)
    }

    /// Listed as editor. Says nothing about ownership.
    #[inline]
    pub fn is_editor(&self, id: ParticipantId) -> bool {
        self.editors.contains(&id)
    }

    /// Record an editor. Returns false if already recorded.
    pub fn grant(&mut self, id: ParticipantId) -> bool {
        self.editors.insert(id)
    }

    /// Drop an editor record. Returns false if there was none.
    pub fn revoke(&mut self, id: ParticipantId) -> bool {
        self.editors.remove(&id)
    }

    pub fn owners(&self) -> &HashSet<ParticipantId> {
        &self.owners
    }

    pub fn editors(&self) -> &HashSet<ParticipantId> {
        &self.editors
    }

    /// Check if a participant may edit under the given mode.
    ///
    /// Presence is not checked here.
    pub fn has_edit_authority(&self, mode: SessionMode, id: ParticipantId) -> bool {
        if self.is_owner(id) {
            return true;
        }
        match mode {
            SessionMode::Open => true,
            SessionMode::Classroom => self.is_editor(id),
        }
    }
}
