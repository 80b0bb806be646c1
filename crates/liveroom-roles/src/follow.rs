//! Follow tracking - whose viewport the local viewer mirrors
//!
//! Following is interest, not authority: any participant may be followed
//! regardless of role. The tracker does not know who is present; the
//! session clears the target when the followed participant leaves.

use liveroom_core::{LiveError, LiveResult, ParticipantId};

/// Follow state for one local viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowTracker {
    local_viewer: ParticipantId,
    target: Option<ParticipantId>,
}

impl FollowTracker {
    pub fn new(local_viewer: ParticipantId) -> Self {
        Self {
            local_viewer,
            target: None,
        }
    }

    #[inline]
    pub fn local_viewer(&self) -> ParticipantId {
        self.local_viewer
    }

    #[inline]
    pub fn target(&self) -> Option<ParticipantId> {
        self.target
    }

    #[inline]
    pub fn is_following(&self, id: ParticipantId) -> bool {
        self.target == Some(id)
    }

    /// Set or clear the follow target.
    ///
    /// Following the current target again keeps it; clearing is always an
    /// explicit `None`.
    pub fn follow(&mut self, target: Option<ParticipantId>) -> LiveResult<()> {
        if target == Some(self.local_viewer) {
            return Err(LiveError::SelfFollow(self.local_viewer));
        }
        self.target = target;
        Ok(())
    }

    /// Clear the target if it is `id`. Returns true if it was cleared.
    pub fn release(&mut self, id: ParticipantId) -> bool {
        if self.is_following(id) {
            self.target = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_and_clear() {
        let mut tracker = FollowTracker::new(ParticipantId::new(1));

        tracker.follow(Some(ParticipantId::new(2))).unwrap();
        assert_eq!(tracker.target(), Some(ParticipantId::new(2)));

        // Not a toggle
        tracker.follow(Some(ParticipantId::new(2))).unwrap();
        assert!(tracker.is_following(ParticipantId::new(2)));

        tracker.follow(None).unwrap();
        assert_eq!(tracker.target(), None);
    }

    #[test]
    fn test_self_follow_rejected() {
        let mut tracker = FollowTracker::new(ParticipantId::new(1));
        tracker.follow(Some(ParticipantId::new(3))).unwrap();

        let err = tracker.follow(Some(ParticipantId::new(1))).unwrap_err();
        assert_eq!(err, LiveError::SelfFollow(ParticipantId::new(1)));
        assert_eq!(tracker.target(), Some(ParticipantId::new(3)));
    }

    #[test]
    fn test_release_only_matching() {
        let mut tracker = FollowTracker::new(ParticipantId::new(1));
        tracker.follow(Some(ParticipantId::new(2))).unwrap();

        assert!(!tracker.release(ParticipantId::new(3)));
        assert_eq!(tracker.target(), Some(ParticipantId::new(2)));

        assert!(tracker.release(ParticipantId::new(2)));
        assert_eq!(tracker.target(), None);
    }
}
