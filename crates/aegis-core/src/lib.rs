//! # Aegis Core
//!
//! Intrusion-detection and alerting core: classifies suspicious actions
//! against a catalog of known attack signatures, raises severity-ranked
//! alerts, enforces a minimal access-control policy over session state, and
//! runs a two-party verification workflow so an account owner can confirm or
//! deny a login attempt that used their correct credentials.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       AEGIS CORE                           │
//! │                                                            │
//! │                 ┌─────────────────┐                        │
//! │                 │      Aegis      │  ← owned context       │
//! │                 └────────┬────────┘                        │
//! │                          │                                 │
//! │      ┌─────────────┬─────┴──────┬──────────────┐           │
//! │      ▼             ▼            ▼              ▼           │
//! │ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌─────────────┐    │
//! │ │Signature │ │  Alert   │ │ Mailbox  │ │Verification │    │
//! │ │ Catalog  │ │  Queue   │ │  Store   │ │ Log+Session │    │
//! │ └──────────┘ └──────────┘ └──────────┘ └─────────────┘    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every detection path (brute force, unauthorized access, credential
//! theft) funnels through the same pipeline: signature lookup, then alert
//! emission, then an optional mailbox notification.
//!
//! ## Security Model
//!
//! The central invariant: **a correct password does not equal access**. A
//! login attempt that guesses the right password only creates a pending
//! verification event; a session opens solely when the account owner
//! approves that event from their inbox. Denial instead raises a
//! `CREDENTIAL_THEFT` alert.
//!
//! ## Usage
//!
//! ```rust
//! use aegis_core::{Aegis, InMemoryDirectory, LoginOutcome, VerificationAnswer};
//!
//! let mut directory = InMemoryDirectory::new();
//! directory.register("alice", "hunter2");
//!
//! let mut core = Aegis::new(directory);
//!
//! // A correct guess is NOT authentication:
//! let outcome = core.attempt_login("alice", &["hunter2"]);
//! assert!(matches!(outcome, LoginOutcome::PendingVerification { .. }));
//! assert!(!core.session().is_open());
//!
//! // Only the owner's approval opens a session:
//! let report = core
//!     .resolve_inbox("alice", "hunter2", |_| VerificationAnswer::Approve)
//!     .unwrap();
//! assert_eq!(report.resolutions.len(), 1);
//! assert!(core.session().is_open());
//! ```

mod aegis;
mod config;
mod directory;
mod error;
mod events;
mod outcome;
mod session;

pub use aegis::{categories, Aegis, UNKNOWN_ATTACKER};
pub use config::{AlertQueueConfig, CoreConfig, LoginConfig, MailboxConfig};
pub use directory::{IdentityDirectory, InMemoryDirectory};
pub use error::CoreError;
pub use events::{EventStatus, LoginVerificationEvent, VerificationLog};
pub use outcome::{
    AccessOutcome, AlertDisposition, InboxReport, LoginOutcome, Resolution, ResolutionOutcome,
    VerificationAnswer,
};
pub use session::Session;

// Re-export component types for convenience
pub use aegis_alerts::{Alert, AlertQueue, QueueFull};
pub use aegis_mailbox::{DeliveryStatus, MailboxStore, Message};
pub use aegis_signatures::{names, Signature, SignatureRegistry};

/// Core result type for fallible operations.
pub type Result<T> = std::result::Result<T, CoreError>;
