//! Shared session handle
//!
//! One writer at a time: every command and presence event takes the write
//! lock for its whole duration, so readers only ever see fully applied
//! states.

use std::sync::Arc;

use liveroom_core::{LiveResult, ParticipantId, SessionMode};
use liveroom_roles::{LiveSession, PanelView, RoleGroups, RoomSnapshot};
use parking_lot::RwLock;
use tracing::debug;

use crate::{Command, PresenceEvent};

/// Cloneable handle to the live session of one view
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<RwLock<LiveSession>>,
}

impl SessionHandle {
    pub fn new(session: LiveSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// Apply a user command
    pub fn dispatch(&self, command: Command) -> LiveResult<bool> {
        let mut session = self.inner.write();
        command.apply(&mut session)
    }

    /// Apply a presence feed event
    pub fn on_presence(&self, event: PresenceEvent) -> bool {
        let mut session = self.inner.write();
        event.apply(&mut session)
    }

    /// Apply a snapshot from the session store
    pub fn apply_snapshot(&self, snapshot: RoomSnapshot) {
        self.inner.write().apply_snapshot(snapshot);
    }

    /// Swap in a fresh session when the surrounding live session changes.
    /// Returns the previous one.
    pub fn replace(&self, session: LiveSession) -> LiveSession {
        debug!(local_viewer = %session.local_viewer(), "session replaced");
        std::mem::replace(&mut *self.inner.write(), session)
    }

    /// Run a query against a consistent snapshot
    pub fn read<R>(&self, f: impl FnOnce(&LiveSession) -> R) -> R {
        f(&*self.inner.read())
    }

    pub fn mode(&self) -> SessionMode {
        self.read(LiveSession::mode)
    }

    pub fn follow_target(&self) -> Option<ParticipantId> {
        self.read(LiveSession::follow_target)
    }

    pub fn groups(&self) -> RoleGroups {
        self.read(LiveSession::groups)
    }

    pub fn panel(&self) -> PanelView {
        self.read(PanelView::build)
    }

    pub fn can_edit(&self, id: ParticipantId) -> bool {
        self.read(|session| session.can_edit(id))
    }
}
