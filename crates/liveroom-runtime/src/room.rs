//! Room info - passive fields and pass-through actions
//!
//! None of this affects roles. The panel shows it and forwards the actions
//! to whatever owns the live connection.

use std::time::SystemTime;

use liveroom_core::RoomId;
use tracing::debug;

/// Action the embedding layer must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomAction {
    /// Stop the live session
    CloseSession,
    SetChatEnabled(bool),
    ToggleNotifications,
}

/// Passive room state shown next to the participant list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    pub room_id: RoomId,
    pub started_at: Option<SystemTime>,
    pub chat_enabled: bool,
    pub notifications_hidden: bool,
}

impl RoomInfo {
    pub fn new(room_id: RoomId) -> Self {
        Self {
            room_id,
            started_at: None,
            chat_enabled: true,
            notifications_hidden: false,
        }
    }

    pub fn with_started_at(mut self, started_at: SystemTime) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Invite link for this room under `base`
    pub fn share_link(&self, base: &str) -> String {
        format!("{}/live/{}", base.trim_end_matches('/'), self.room_id)
    }

    /// Mirror a pass-through action locally and hand it back for forwarding
    pub fn apply(&mut self, action: RoomAction) -> RoomAction {
        match action {
            RoomAction::CloseSession => {}
            RoomAction::SetChatEnabled(enabled) => self.chat_enabled = enabled,
            RoomAction::ToggleNotifications => {
                self.notifications_hidden = !self.notifications_hidden
            }
        }
        debug!(room = %self.room_id, ?action, "room action");
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_link() {
        let room = RoomInfo::new(RoomId::new("k3x9"));
        assert_eq!(
            room.share_link("https://example.com/"),
            "https://example.com/live/k3x9"
        );
        assert_eq!(room.share_link("http://localhost"), "http://localhost/live/k3x9");
    }

    #[test]
    fn test_toggles() {
        let mut room = RoomInfo::new(RoomId::new("k3x9"));

        assert_eq!(
            room.apply(RoomAction::SetChatEnabled(false)),
            RoomAction::SetChatEnabled(false)
        );
        assert!(!room.chat_enabled);

        room.apply(RoomAction::ToggleNotifications);
        assert!(room.notifications_hidden);
        room.apply(RoomAction::ToggleNotifications);
        assert!(!room.notifications_hidden);

        let before = room.clone();
        assert_eq!(room.apply(RoomAction::CloseSession), RoomAction::CloseSession);
        assert_eq!(room, before);
    }
}
