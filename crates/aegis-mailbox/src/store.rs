//! The mailbox store and its data model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single notification owned by one identity's mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Category tag, e.g. `"LOGIN_ATTEMPT"` or `"UNAUTHORIZED_ACCESS"`.
    pub category: String,

    /// Free-text details shown to the owner.
    pub details: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(category: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            details: details.into(),
        }
    }
}

/// Outcome of a delivery attempt.
///
/// All three states must be handled by callers; none of them is an error in
/// the `Result` sense, and none of them is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// The message was appended to the recipient's mailbox.
    Delivered,

    /// The recipient's mailbox is at capacity; the message was dropped.
    MailboxFull,

    /// The recipient is not a known identity; the message was dropped.
    ///
    /// Produced by the facade that owns the identity directory, never by
    /// [`MailboxStore`] itself.
    UnknownRecipient,
}

impl DeliveryStatus {
    /// Returns true if the message reached a mailbox.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Per-identity bounded message store.
///
/// Mailboxes are materialized on first delivery. Each mailbox holds at most
/// `capacity` messages, in delivery order.
///
/// # Thread Safety
///
/// No interior synchronization; use external synchronization (e.g. `Mutex`)
/// for concurrent access.
#[derive(Debug)]
pub struct MailboxStore {
    boxes: HashMap<String, Vec<Message>>,
    capacity: usize,
}

impl MailboxStore {
    /// Creates a store whose mailboxes hold at most `capacity` messages each.
    pub fn new(capacity: usize) -> Self {
        Self {
            boxes: HashMap::new(),
            capacity,
        }
    }

    /// Appends a message to `identity`'s mailbox.
    ///
    /// Returns [`DeliveryStatus::MailboxFull`] (dropping the message) once
    /// the mailbox holds `capacity` messages.
    pub fn deliver(&mut self, identity: &str, message: Message) -> DeliveryStatus {
        let mailbox = self.boxes.entry(identity.to_string()).or_default();
        if mailbox.len() >= self.capacity {
            return DeliveryStatus::MailboxFull;
        }
        mailbox.push(message);
        DeliveryStatus::Delivered
    }

    /// Returns all of `identity`'s messages in delivery order.
    ///
    /// This is a persistent read: nothing is removed, and a later fetch
    /// returns the same history plus anything delivered in between.
    pub fn fetch(&self, identity: &str) -> &[Message] {
        self.boxes.get(identity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns how many messages `identity` currently holds.
    pub fn message_count(&self, identity: &str) -> usize {
        self.boxes.get(identity).map_or(0, Vec::len)
    }

    /// Returns the per-mailbox capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_and_fetch_in_order() {
        let mut store = MailboxStore::new(10);
        store.deliver("alice", Message::new("LOGIN_FAIL", "first"));
        store.deliver("alice", Message::new("LOGIN_ATTEMPT", "second"));

        let messages = store.fetch("alice");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].details, "first");
        assert_eq!(messages[1].details, "second");
    }

    #[test]
    fn test_fetch_is_persistent() {
        let mut store = MailboxStore::new(10);
        store.deliver("alice", Message::new("LOGIN_FAIL", "kept"));

        assert_eq!(store.fetch("alice").len(), 1);
        // A second fetch still sees the full history.
        assert_eq!(store.fetch("alice").len(), 1);
    }

    #[test]
    fn test_fetch_unknown_identity_is_empty() {
        let store = MailboxStore::new(10);
        assert!(store.fetch("nobody").is_empty());
        assert_eq!(store.message_count("nobody"), 0);
    }

    #[test]
    fn test_capacity_bound_reported() {
        let mut store = MailboxStore::new(2);
        assert!(store.deliver("alice", Message::new("A", "1")).is_delivered());
        assert!(store.deliver("alice", Message::new("B", "2")).is_delivered());

        let status = store.deliver("alice", Message::new("C", "3"));
        assert_eq!(status, DeliveryStatus::MailboxFull);
        assert_eq!(store.message_count("alice"), 2);
    }

    #[test]
    fn test_capacity_is_per_identity() {
        let mut store = MailboxStore::new(1);
        assert!(store.deliver("alice", Message::new("A", "1")).is_delivered());
        // Bob's mailbox is independent of Alice's full one.
        assert!(store.deliver("bob", Message::new("A", "1")).is_delivered());
    }

    #[test]
    fn test_message_serialization() {
        let message = Message::new("UNAUTHORIZED_ACCESS", "someone poked your data");

        let json = serde_json::to_string(&message).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();

        assert_eq!(message, parsed);
    }
}
