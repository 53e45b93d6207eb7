//! The login-verification event log.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::Result;

/// Lifecycle of a verification event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    /// Awaiting the account owner's answer.
    Pending,

    /// The owner answered. Terminal; an event is never re-opened.
    Resolved,
}

/// A pending confirmation request created when a login guessed the correct
/// password but authentication was deliberately withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginVerificationEvent {
    /// Opaque, generation-time random token identifying this event.
    pub id: Uuid,

    /// The account whose password was guessed correctly.
    pub username: String,

    /// Current lifecycle state.
    pub status: EventStatus,
}

impl LoginVerificationEvent {
    /// Returns true if the event still awaits its owner's answer.
    pub fn is_pending(&self) -> bool {
        self.status == EventStatus::Pending
    }
}

/// Append-only log of verification events.
///
/// Events are recorded in creation order and never deleted; resolution flips
/// the status exactly once.
#[derive(Debug, Default)]
pub struct VerificationLog {
    events: Vec<LoginVerificationEvent>,
}

impl VerificationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new pending event for `username` and returns its id.
    pub(crate) fn record(&mut self, username: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.events.push(LoginVerificationEvent {
            id,
            username: username.to_string(),
            status: EventStatus::Pending,
        });
        id
    }

    /// Returns the event with this id, if it exists.
    pub fn get(&self, id: Uuid) -> Option<&LoginVerificationEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Returns snapshots of `username`'s pending events, in creation order.
    pub fn pending_for(&self, username: &str) -> Vec<LoginVerificationEvent> {
        self.events
            .iter()
            .filter(|event| event.is_pending() && event.username == username)
            .cloned()
            .collect()
    }

    /// Marks the event resolved and returns its owner.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownEvent`] if no event has this id;
    /// [`CoreError::AlreadyResolved`] if it was resolved before; the log is
    /// left unchanged in both cases.
    pub(crate) fn resolve(&mut self, id: Uuid) -> Result<String> {
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(CoreError::UnknownEvent(id))?;

        if event.status == EventStatus::Resolved {
            return Err(CoreError::AlreadyResolved(id));
        }

        event.status = EventStatus::Resolved;
        Ok(event.username.clone())
    }

    /// Returns the total number of recorded events (pending and resolved).
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates all events in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &LoginVerificationEvent> {
        self.events.iter()
    }
}
