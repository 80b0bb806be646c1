//! Live session - the role model state machine
//!
//! Holds mode, presence, role records and follow target for one view.
//! Every mutation goes through a command method so that no observable
//! snapshot breaks the role invariants.

use liveroom_core::{
    LiveError, LiveResult, Participant, ParticipantId, Role, SessionMode, TargetIssue,
};
use tracing::{debug, info, warn};

use crate::{classify, FollowTracker, RoleCommandPolicy, RoleGroups, RoleRecords, SessionConfig};

/// Authoritative mode and role records from the session store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub mode: SessionMode,
    pub owner_ids: Vec<ParticipantId>,
    pub editor_ids: Vec<ParticipantId>,
}

impl RoomSnapshot {
    pub fn new(mode: SessionMode) -> Self {
        Self {
            mode,
            owner_ids: Vec::new(),
            editor_ids: Vec::new(),
        }
    }

    pub fn with_owners(mut self, owners: impl IntoIterator<Item = ParticipantId>) -> Self {
        self.owner_ids = owners.into_iter().collect();
        self
    }

    pub fn with_editors(mut self, editors: impl IntoIterator<Item = ParticipantId>) -> Self {
        self.editor_ids = editors.into_iter().collect();
        self
    }
}

/// Role model for one live session, as seen by one local viewer
#[derive(Debug, Clone)]
pub struct LiveSession {
    config: SessionConfig,
    mode: SessionMode,
    /// Arrival order
    participants: Vec<Participant>,
    records: RoleRecords,
    follow: FollowTracker,
}

impl LiveSession {
    /// Create an empty session for `local_viewer`
    pub fn new(local_viewer: ParticipantId, config: SessionConfig) -> Self {
        Self {
            mode: config.initial_mode,
            config,
            participants: Vec::new(),
            records: RoleRecords::new(),
            follow: FollowTracker::new(local_viewer),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[inline]
    pub fn local_viewer(&self) -> ParticipantId {
        self.follow.local_viewer()
    }

    #[inline]
    pub fn follow_target(&self) -> Option<ParticipantId> {
        self.follow.target()
    }

    /// Present participants in arrival order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn is_present(&self, id: ParticipantId) -> bool {
        self.participant(id).is_some()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Raw records, including ids that are not present
    pub fn records(&self) -> &RoleRecords {
        &self.records
    }

    /// Present owners, arrival order
    pub fn owner_ids(&self) -> Vec<ParticipantId> {
        self.present_ids(|id| self.records.is_owner(id))
    }

    /// Present participants recorded as editors, arrival order
    pub fn editor_ids(&self) -> Vec<ParticipantId> {
        self.present_ids(|id| self.records.is_editor(id))
    }

    fn present_ids(&self, keep: impl Fn(ParticipantId) -> bool) -> Vec<ParticipantId> {
        self.participants
            .iter()
            .map(|p| p.id)
            .filter(|id| keep(*id))
            .collect()
    }

    /// Display groups for the current snapshot
    pub fn groups(&self) -> RoleGroups {
        classify(&self.participants, &self.records)
    }

    /// Recorded role, ignoring mode. `None` if not present.
    pub fn role_of(&self, id: ParticipantId) -> Option<Role> {
        if !self.is_present(id) {
            return None;
        }
        let role = if self.records.is_owner(id) {
            Role::Owner
        } else if self.records.is_editor(id) {
            Role::Editor
        } else {
            Role::Spectator
        };
        Some(role)
    }

    /// Role enforced under the current mode. `None` if not present.
    pub fn effective_role(&self, id: ParticipantId) -> Option<Role> {
        self.role_of(id).map(|role| match (self.mode, role) {
            (SessionMode::Open, Role::Spectator) => Role::Editor,
            (_, role) => role,
        })
    }

    /// Check if a present participant may edit right now
    pub fn can_edit(&self, id: ParticipantId) -> bool {
        self.is_present(id) && self.records.has_edit_authority(self.mode, id)
    }

    /// Switch mode. Records are untouched. Returns true if the mode changed.
    pub fn set_mode(&mut self, mode: SessionMode) -> bool {
        if self.mode == mode {
            return false;
        }
        info!(from = %self.mode, to = %mode, "session mode changed");
        self.mode = mode;
        true
    }

    /// Record `id` as editor. Returns false if already recorded.
    pub fn promote(&mut self, id: ParticipantId) -> LiveResult<bool> {
        if let Err(err) = self.check_role_command(id) {
            warn!(participant = %id, error = %err, "promote rejected");
            return Err(err);
        }
        let changed = self.records.grant(id);
        debug!(participant = %id, changed, mode = %self.mode, "promote applied");
        Ok(changed)
    }

    /// Drop the editor record of `id`. Returns false if there was none.
    pub fn demote(&mut self, id: ParticipantId) -> LiveResult<bool> {
        if let Err(err) = self.check_role_command(id) {
            warn!(participant = %id, error = %err, "demote rejected");
            return Err(err);
        }
        let changed = self.records.revoke(id);
        debug!(participant = %id, changed, mode = %self.mode, "demote applied");
        Ok(changed)
    }

    fn check_role_command(&self, id: ParticipantId) -> LiveResult<()> {
        if self.mode == SessionMode::Open
            && self.config.open_mode_role_commands == RoleCommandPolicy::Reject
        {
            return Err(LiveError::ModeMismatch { mode: self.mode });
        }
        if !self.is_present(id) {
            return Err(LiveError::invalid_target(id, TargetIssue::NotPresent));
        }
        if self.records.is_owner(id) {
            return Err(LiveError::invalid_target(id, TargetIssue::Owner));
        }
        if id == self.local_viewer() {
            return Err(LiveError::invalid_target(id, TargetIssue::LocalViewer));
        }
        Ok(())
    }

    /// Set or clear the follow target
    pub fn follow(&mut self, target: Option<ParticipantId>) -> LiveResult<()> {
        if let Err(err) = self.follow.follow(target) {
            warn!(error = %err, "follow rejected");
            return Err(err);
        }
        debug!(followed = ?target, "follow target set");
        Ok(())
    }

    /// Presence: a participant joined.
    ///
    /// A repeated join refreshes the display name and keeps the original
    /// arrival position. Returns true if the participant is new.
    pub fn join(&mut self, participant: Participant) -> bool {
        if let Some(existing) = self.participants.iter_mut().find(|p| p.id == participant.id) {
            if existing.name != participant.name {
                debug!(participant = %participant.id, name = %participant.name, "participant renamed");
                existing.name = participant.name;
            }
            return false;
        }

        if !self.config.admits(self.participants.len()) {
            warn!(
                participant = %participant.id,
                max = ?self.config.max_participants,
                "participant cap reached, join ignored"
            );
            return false;
        }

        info!(participant = %participant.id, name = %participant.name, "participant joined");
        self.participants.push(participant);
        true
    }

    /// Presence: a participant left. Clears the follow target if it was them.
    pub fn leave(&mut self, id: ParticipantId) -> Option<Participant> {
        let index = self.participants.iter().position(|p| p.id == id)?;
        let participant = self.participants.remove(index);

        if self.follow.release(id) {
            info!(participant = %id, "followed participant left, follow cleared");
        }
        info!(participant = %id, "participant left");
        Some(participant)
    }

    /// Replace mode and role records with the store's snapshot
    pub fn apply_snapshot(&mut self, snapshot: RoomSnapshot) {
        debug!(
            mode = %snapshot.mode,
            owners = snapshot.owner_ids.len(),
            editors = snapshot.editor_ids.len(),
            "applying room snapshot"
        );
        self.set_mode(snapshot.mode);
        self.records = RoleRecords::with_ids(snapshot.owner_ids, snapshot.editor_ids);
    }
}
