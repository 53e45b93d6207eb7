//! The signature catalog itself.

use std::collections::HashMap;

use crate::models::{Signature, SignatureError};
use crate::{names, Result};

/// Name-keyed catalog of attack signatures.
///
/// Lookup is exact-match and case-sensitive. Duplicate names are rejected at
/// registration time; there is no update or removal path, matching the
/// load-once nature of the catalog.
///
/// # Thread Safety
///
/// `SignatureRegistry` is a plain in-memory map with no interior
/// synchronization. Use external synchronization (e.g. `Mutex`) for
/// concurrent access.
///
/// # Example
///
/// ```rust
/// use aegis_signatures::{Signature, SignatureRegistry};
///
/// let mut catalog = SignatureRegistry::new();
/// catalog.register(Signature::new(7, "PORT_SCAN", 4, "Sequential probe of service ports.")).unwrap();
///
/// assert!(catalog.lookup("PORT_SCAN").is_some());
/// assert!(catalog.lookup("port_scan").is_none()); // case-sensitive
/// ```
#[derive(Default)]
pub struct SignatureRegistry {
    table: HashMap<String, Signature>,
}

impl SignatureRegistry {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with the three well-known signatures the
    /// detection paths depend on.
    ///
    /// | Name | Severity |
    /// |------|----------|
    /// | `CREDENTIAL_THEFT` | 9 |
    /// | `UNAUTHORIZED_ACCESS` | 10 |
    /// | `BRUTE_FORCE` | 7 |
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();

        // Seeding an empty catalog cannot collide.
        let builtin = [
            Signature::new(1, names::CREDENTIAL_THEFT, 9, "User denied a correct-password login."),
            Signature::new(2, names::UNAUTHORIZED_ACCESS, 10, "Unauthorized attempt to access user data."),
            Signature::new(3, names::BRUTE_FORCE, 7, "Multiple wrong password guesses in login."),
        ];
        for sig in builtin {
            let _ = catalog.register(sig);
        }

        catalog
    }

    /// Registers a signature under its name.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::AlreadyRegistered`] if a signature with the
    /// same name is already present; the existing entry is left untouched.
    pub fn register(&mut self, signature: Signature) -> Result<()> {
        if self.table.contains_key(&signature.name) {
            return Err(SignatureError::AlreadyRegistered(signature.name));
        }
        self.table.insert(signature.name.clone(), signature);
        Ok(())
    }

    /// Looks up a signature by exact name.
    ///
    /// `None` means "no alert should be raised for this condition" and is a
    /// legitimate outcome, not an error.
    pub fn lookup(&self, name: &str) -> Option<&Signature> {
        self.table.get(name)
    }

    /// Checks whether a signature name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Returns the number of registered signatures.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl std::fmt::Debug for SignatureRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureRegistry")
            .field("signatures", &self.len())
            .finish()
    }
}
