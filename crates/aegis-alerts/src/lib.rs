//! # Alert Queue
//!
//! Severity-ordered buffer of raised alerts, consumed by the triage path.
//!
//! Detection paths push alerts as they fire; an operator later drains the
//! queue and handles the most urgent alerts first. The queue is bounded:
//! once full, new alerts are discarded and the overflow is reported to the
//! caller instead of being swallowed, so saturation is observable.
//!
//! ## Ordering
//!
//! Alerts drain in non-increasing severity order. Equal severities drain in
//! insertion order (earlier-emitted first), making drain order fully
//! deterministic.
//!
//! ## Usage
//!
//! ```rust
//! use aegis_alerts::{Alert, AlertQueue};
//!
//! let mut queue = AlertQueue::new(16);
//! queue.push(Alert::new("BRUTE_FORCE", "unknown", "alice", 7, "guess storm")).unwrap();
//! queue.push(Alert::new("UNAUTHORIZED_ACCESS", "mallory", "alice", 10, "data grab")).unwrap();
//!
//! let drained = queue.drain_all();
//! assert_eq!(drained[0].severity, 10);
//! assert!(queue.is_empty());
//! ```

mod alert;
mod queue;

pub use alert::Alert;
pub use queue::{AlertQueue, QueueFull};
