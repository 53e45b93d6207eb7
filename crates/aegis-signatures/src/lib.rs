//! # Signature Catalog
//!
//! Static catalog of named attack patterns with severities. Every detection
//! path in the Aegis core resolves a signature by name before emitting an
//! alert, so the catalog is the single source of truth for how urgent a
//! detected event is.
//!
//! ## Contract
//!
//! - Names are unique and case-sensitive; lookup is exact-match by name only.
//! - A failed lookup is a legitimate outcome ("no alert for this condition"),
//!   not an error. Callers skip alert emission and carry on.
//! - Severity is copied out of the catalog at alert-emission time; a later
//!   catalog change never affects already-emitted alerts.
//!
//! ## Usage
//!
//! ```rust
//! use aegis_signatures::{names, SignatureRegistry};
//!
//! let catalog = SignatureRegistry::with_builtin();
//!
//! let sig = catalog.lookup(names::BRUTE_FORCE).unwrap();
//! assert_eq!(sig.severity, 7);
//! ```

mod models;
mod registry;

pub use models::{Signature, SignatureError};
pub use registry::SignatureRegistry;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, SignatureError>;

/// Well-known signature names referenced by the detection paths.
///
/// These are a fixed contract, not configuration: the login-verification
/// workflow and the access-control evaluator look them up by these exact
/// strings.
pub mod names {
    /// Owner denied a login that used their correct password.
    pub const CREDENTIAL_THEFT: &str = "CREDENTIAL_THEFT";

    /// Data access without a matching session.
    pub const UNAUTHORIZED_ACCESS: &str = "UNAUTHORIZED_ACCESS";

    /// Repeated wrong password guesses against one account.
    pub const BRUTE_FORCE: &str = "BRUTE_FORCE";
}
