//! Error types for the Aegis core.

use thiserror::Error;
use uuid::Uuid;

/// Core error type for facade operations.
///
/// None of these are fatal: bad input ("unknown identity") is kept distinct
/// from security events, which are reported through outcomes and alerts
/// rather than errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The operation target is not a registered identity.
    ///
    /// Reported to the caller; never raises an alert.
    #[error("identity '{0}' is not registered")]
    UnknownIdentity(String),

    /// The supplied credentials do not match the identity's own.
    ///
    /// The inbox only opens for its owner.
    #[error("invalid credentials for '{0}'")]
    InvalidCredentials(String),

    /// No verification event with this id exists.
    #[error("verification event {0} does not exist")]
    UnknownEvent(Uuid),

    /// The verification event was already resolved.
    ///
    /// Resolution happens exactly once; a second answer is rejected and the
    /// effects of the first are left unchanged.
    #[error("verification event {0} was already resolved")]
    AlreadyResolved(Uuid),

    /// Signature catalog error passthrough.
    #[error(transparent)]
    Signature(#[from] aegis_signatures::SignatureError),
}
