//! # Notification Mailbox
//!
//! Per-identity bounded store of asynchronous notifications.
//!
//! Detection paths deliver messages here so account owners can later read
//! them; the login-verification workflow depends on this channel to tell an
//! owner that their password was guessed and to collect their response.
//!
//! ## Semantics
//!
//! - Delivery beyond an identity's capacity is reported as
//!   [`DeliveryStatus::MailboxFull`]; the message is dropped and the mailbox
//!   never grows past its bound.
//! - `fetch` is a persistent read: messages are returned in delivery order
//!   and are NOT removed, so a re-fetch sees the full history. Notifications
//!   must survive until the owner acts on them.
//!
//! The store is a leaf with no knowledge of which identities exist; the
//! owning facade gates delivery on its identity directory and reports
//! [`DeliveryStatus::UnknownRecipient`] for identities the directory does
//! not know.

mod store;

pub use store::{DeliveryStatus, MailboxStore, Message};
