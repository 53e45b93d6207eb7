//! Outcome types for the core operations.
//!
//! Capacity limits and signature misses are surfaced here as data instead of
//! being swallowed: every operation that can emit an alert or a notification
//! reports what actually happened to it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aegis_mailbox::{DeliveryStatus, Message};

/// What became of an alert a detection path tried to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertDisposition {
    /// The alert is in the queue awaiting triage.
    Raised {
        /// Id of the queued alert.
        alert_id: Uuid,
    },

    /// The queue was at capacity; the alert was dropped.
    QueueFull,

    /// The triggering signature is not in the catalog; emission was skipped
    /// and the rest of the operation continued.
    SignatureMissing,
}

impl AlertDisposition {
    /// Returns true if an alert actually entered the queue.
    pub fn is_raised(&self) -> bool {
        matches!(self, Self::Raised { .. })
    }
}

impl std::fmt::Display for AlertDisposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raised { alert_id } => write!(f, "alert {} raised", alert_id),
            Self::QueueFull => write!(f, "alert dropped: queue full"),
            Self::SignatureMissing => write!(f, "alert skipped: signature missing"),
        }
    }
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginOutcome {
    /// The target identity does not exist. No state changed, no alert.
    UnknownIdentity,

    /// A guess matched. This is explicitly NOT authentication: a pending
    /// verification event was created and the owner was notified. No session
    /// was opened and no alert was raised.
    PendingVerification {
        /// Id of the pending verification event.
        event_id: Uuid,
        /// Fate of the owner's `LOGIN_ATTEMPT` notification.
        notice: DeliveryStatus,
    },

    /// Every guess was wrong. A brute-force alert was emitted and the owner
    /// was notified; no verification event exists for this attempt.
    Blocked {
        /// Fate of the brute-force alert.
        alert: AlertDisposition,
        /// Fate of the owner's `LOGIN_FAIL` notification.
        notice: DeliveryStatus,
    },
}

impl LoginOutcome {
    /// Returns true if the attempt is awaiting owner verification.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingVerification { .. })
    }

    /// Returns true if the attempt was blocked as brute force.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

impl std::fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentity => write!(f, "unknown identity; login blocked"),
            Self::PendingVerification { event_id, .. } => {
                write!(f, "correct password; verification {} pending owner approval", event_id)
            }
            Self::Blocked { alert, .. } => write!(f, "all guesses wrong; {}", alert),
        }
    }
}

/// Result of a data-access request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessOutcome {
    /// The target identity does not exist. Usage error, not a security event.
    UnknownIdentity,

    /// The open session owns the target data. No side effects.
    Allowed,

    /// Access refused; an unauthorized-access alert was emitted and the
    /// target was notified.
    Denied {
        /// Who the alert attributes the attempt to: the current session's
        /// identity, or the `"unknown"` sentinel when no session is open.
        attacker: String,
        /// Fate of the unauthorized-access alert.
        alert: AlertDisposition,
        /// Fate of the target's notification.
        notice: DeliveryStatus,
    },
}

impl AccessOutcome {
    /// Returns true if access was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns true if access was refused.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }
}

impl std::fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentity => write!(f, "target identity not found"),
            Self::Allowed => write!(f, "access allowed"),
            Self::Denied { attacker, .. } => write!(f, "access denied (attacker: {})", attacker),
        }
    }
}

/// The account owner's answer to a pending login verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationAnswer {
    /// "Yes, that login was me."
    Approve,

    /// "No, that was not me."
    Deny,
}

/// Effect of resolving one verification event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    /// The owner approved: a session is now open for them. This is the only
    /// path in the system that grants a session.
    SessionOpened {
        /// The identity the session belongs to.
        identity: String,
    },

    /// The owner denied: a credential-theft alert was emitted and no session
    /// changed.
    AttemptDenied {
        /// Fate of the credential-theft alert.
        alert: AlertDisposition,
    },
}

impl std::fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionOpened { identity } => write!(f, "session opened for '{}'", identity),
            Self::AttemptDenied { alert } => write!(f, "login denied by owner; {}", alert),
        }
    }
}

/// One resolved verification event from an inbox pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The event that was resolved.
    pub event_id: Uuid,

    /// What the owner's answer did.
    pub outcome: ResolutionOutcome,
}

/// Everything an inbox visit produced: the owner's messages plus the effect
/// of each pending verification they answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxReport {
    /// All messages in delivery order (a persistent read; nothing removed).
    pub messages: Vec<Message>,

    /// Resolutions applied during this pass, in event-creation order.
    pub resolutions: Vec<Resolution>,
}
