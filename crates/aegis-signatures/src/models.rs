//! Data model for the signature catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, severity-ranked description of a known bad pattern.
///
/// Signatures are immutable after load. The `id` is informational only; the
/// catalog is keyed and queried by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Informational numeric id. Not an index; lookups go by name.
    pub id: u32,

    /// Unique, case-sensitive name (e.g. `"BRUTE_FORCE"`).
    pub name: String,

    /// Urgency of a match. Higher is more urgent.
    pub severity: u8,

    /// Human-readable description of the pattern.
    pub description: String,
}

impl Signature {
    /// Creates a new signature record.
    pub fn new(id: u32, name: impl Into<String>, severity: u8, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            severity,
            description: description.into(),
        }
    }
}

/// Errors that can occur when maintaining the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// A signature with this name is already in the catalog.
    ///
    /// Registration is rejected rather than overwritten so severities that
    /// were already copied into emitted alerts stay trustworthy.
    #[error("signature '{0}' is already registered")]
    AlreadyRegistered(String),
}
