//! Session state.

use serde::{Deserialize, Serialize};

/// The single record of which identity, if any, is currently authorized.
///
/// A session opens ONLY when an account owner approves a pending login
/// verification; a correct password never opens one directly. `current` is
/// `Some` exactly when a session is open, so "logged in implies a valid
/// identity" holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    current: Option<String>,
}

impl Session {
    /// Returns true if a session is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the identity holding the session, if any.
    pub fn current_identity(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Opens a session for `identity`, replacing any previous session.
    pub(crate) fn open(&mut self, identity: String) {
        self.current = Some(identity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let session = Session::default();
        assert!(!session.is_open());
        assert!(session.current_identity().is_none());
    }

    #[test]
    fn test_open_replaces_previous() {
        let mut session = Session::default();
        session.open("alice".to_string());
        assert_eq!(session.current_identity(), Some("alice"));

        session.open("bob".to_string());
        assert_eq!(session.current_identity(), Some("bob"));
        assert!(session.is_open());
    }
}
