//! The alert record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An emitted, severity-tagged record of a detected suspicious event.
///
/// Alerts are created only by the detection paths, consumed exactly once by
/// the drain operation, and never mutated after creation. The `severity` is
/// copied from the triggering signature at emission time, so a later catalog
/// change cannot retroactively reclassify an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Opaque, generation-time random token identifying this alert.
    pub id: Uuid,

    /// Name of the signature that triggered the alert.
    pub signature: String,

    /// Identity believed responsible; the sentinel `"unknown"` when no
    /// session attributes the action.
    pub attacker: String,

    /// Identity whose account or data was targeted.
    pub target: String,

    /// Urgency, frozen at emission time. Higher is more urgent.
    pub severity: u8,

    /// Human-readable cause.
    pub message: String,
}

impl Alert {
    /// Creates a new alert with a fresh random id.
    pub fn new(
        signature: impl Into<String>,
        attacker: impl Into<String>,
        target: impl Into<String>,
        severity: u8,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            signature: signature.into(),
            attacker: attacker.into(),
            target: target.into(),
            severity,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[sev {}] {} attacker={} target={}: {}",
            self.severity, self.signature, self.attacker, self.target, self.message
        )
    }
}
