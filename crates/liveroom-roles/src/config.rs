//! Session configuration

use liveroom_core::SessionMode;

/// What promote/demote do while the session is in Open mode.
///
/// Open mode has no explicit promotion, so the panel never offers these
/// commands there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleCommandPolicy {
    /// Update the editor record anyway; takes effect once Classroom mode is
    /// entered again
    #[default]
    Latent,
    /// Refuse with `ModeMismatch`
    Reject,
}

/// Live session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Mode before the first snapshot arrives
    pub initial_mode: SessionMode,
    /// Handling of role commands in Open mode
    pub open_mode_role_commands: RoleCommandPolicy,
    /// Presence cap; joins past it are ignored (None = unbounded)
    pub max_participants: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_mode: SessionMode::Open,
            open_mode_role_commands: RoleCommandPolicy::Latent,
            max_participants: None,
        }
    }
}

impl SessionConfig {
    pub fn with_initial_mode(mut self, mode: SessionMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_role_command_policy(mut self, policy: RoleCommandPolicy) -> Self {
        self.open_mode_role_commands = policy;
        self
    }

    pub fn with_max_participants(mut self, max: usize) -> Self {
        self.max_participants = Some(max);
        self
    }

    /// Would one more participant fit?
    pub fn admits(&self, current: usize) -> bool {
        self.max_participants.map_or(true, |max| current < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.initial_mode, SessionMode::Open);
        assert_eq!(config.open_mode_role_commands, RoleCommandPolicy::Latent);
        assert!(config.admits(10_000));
    }

    #[test]
    fn test_participant_cap() {
        let config = SessionConfig::default().with_max_participants(2);
        assert!(config.admits(1));
        assert!(!config.admits(2));
    }
}
