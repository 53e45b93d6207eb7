//! Configuration types for the Aegis core.

use serde::{Deserialize, Serialize};

/// Configuration for [`Aegis`](crate::Aegis).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Alert queue configuration.
    pub alerts: AlertQueueConfig,

    /// Notification mailbox configuration.
    pub mailbox: MailboxConfig,

    /// Login workflow configuration.
    pub login: LoginConfig,
}

/// Alert queue configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertQueueConfig {
    /// Maximum number of queued alerts. Overflow is dropped and reported.
    pub capacity: usize,
}

impl Default for AlertQueueConfig {
    fn default() -> Self {
        Self { capacity: 200 }
    }
}

/// Notification mailbox configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailboxConfig {
    /// Maximum messages held per identity. Overflow is dropped and reported.
    pub capacity: usize,
}

impl Default for MailboxConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

/// Login workflow configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Maximum password guesses evaluated per attempt; extras are ignored.
    pub max_guesses: usize,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self { max_guesses: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoreConfig::default();
        assert_eq!(config.alerts.capacity, 200);
        assert_eq!(config.mailbox.capacity, 100);
        assert_eq!(config.login.max_guesses, 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = CoreConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
