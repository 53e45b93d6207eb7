//! The unified intrusion-detection facade.
//!
//! [`Aegis`] owns every piece of detection state (signature catalog,
//! alert queue, mailbox store, verification log, session) and
//! exposes the five operations the surrounding application drives:
//! signature registration, login attempts, inbox resolution, access
//! evaluation, and alert draining.

use tracing::{debug, info, warn};
use uuid::Uuid;

use aegis_alerts::{Alert, AlertQueue};
use aegis_mailbox::{DeliveryStatus, MailboxStore, Message};
use aegis_signatures::{names, Signature, SignatureRegistry};

use crate::config::CoreConfig;
use crate::directory::IdentityDirectory;
use crate::error::CoreError;
use crate::events::{LoginVerificationEvent, VerificationLog};
use crate::outcome::{
    AccessOutcome, AlertDisposition, InboxReport, LoginOutcome, Resolution, ResolutionOutcome,
    VerificationAnswer,
};
use crate::session::Session;
use crate::Result;

/// Sentinel attacker identity used when no session attributes an action.
pub const UNKNOWN_ATTACKER: &str = "unknown";

/// Message category tags used by the detection paths.
pub mod categories {
    /// A login attempt used the owner's correct password.
    pub const LOGIN_ATTEMPT: &str = "LOGIN_ATTEMPT";

    /// A login attempt exhausted its guesses without a match.
    pub const LOGIN_FAIL: &str = "LOGIN_FAIL";

    /// Someone tried to read the owner's data without authorization.
    pub const UNAUTHORIZED_ACCESS: &str = "UNAUTHORIZED_ACCESS";
}

/// The intrusion-detection and alerting core.
///
/// All state lives in this owned context object; two cores in one process
/// are fully independent. The identity directory is supplied by the caller
/// and is the seam through which real credential verification can be
/// substituted.
///
/// # Security Model
///
/// A correct password never opens a session. It creates a pending
/// verification event, and only the account owner's approval, given from
/// their own authenticated inbox, grants the session. Every detection path
/// funnels through one pipeline: signature lookup → alert emission →
/// mailbox notification, and each stage reports its fate instead of failing
/// silently.
///
/// # Thread Safety
///
/// The core has no interior synchronization; each operation checks and
/// mutates state within one `&mut self` call. Concurrent callers must wrap
/// the core in external synchronization (e.g. `Mutex`) so that
/// check-then-mutate stays one atomic step.
pub struct Aegis<D> {
    /// Configuration.
    config: CoreConfig,

    /// Identity directory supplied by the surrounding application.
    directory: D,

    /// Catalog of known attack signatures.
    signatures: SignatureRegistry,

    /// Severity-ordered queue of raised alerts.
    alerts: AlertQueue,

    /// Per-identity notification mailboxes.
    mailboxes: MailboxStore,

    /// Append-only log of login-verification events.
    verifications: VerificationLog,

    /// The single process-wide session record.
    session: Session,
}

impl<D: IdentityDirectory> Aegis<D> {
    /// Creates a core with default configuration and the builtin signature
    /// catalog.
    pub fn new(directory: D) -> Self {
        Self::with_config(CoreConfig::default(), directory)
    }

    /// Creates a core with the given configuration and the builtin catalog.
    pub fn with_config(config: CoreConfig, directory: D) -> Self {
        Self::with_catalog(config, SignatureRegistry::with_builtin(), directory)
    }

    /// Creates a core over a caller-supplied signature catalog.
    ///
    /// The detection paths look up the well-known names in
    /// [`aegis_signatures::names`]; a catalog missing one of them degrades
    /// to [`AlertDisposition::SignatureMissing`] on that path rather than
    /// failing.
    pub fn with_catalog(config: CoreConfig, signatures: SignatureRegistry, directory: D) -> Self {
        let alerts = AlertQueue::new(config.alerts.capacity);
        let mailboxes = MailboxStore::new(config.mailbox.capacity);

        info!(
            "intrusion core initialized: {} signature(s), alert capacity {}, mailbox capacity {}",
            signatures.len(),
            config.alerts.capacity,
            config.mailbox.capacity
        );

        Self {
            config,
            directory,
            signatures,
            alerts,
            mailboxes,
            verifications: VerificationLog::new(),
            session: Session::default(),
        }
    }

    /// Registers an attack signature in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Signature`] if the name is already registered;
    /// the existing entry is kept.
    pub fn register_signature(
        &mut self,
        id: u32,
        name: &str,
        severity: u8,
        description: &str,
    ) -> Result<()> {
        self.signatures
            .register(Signature::new(id, name, severity, description))?;
        info!("registered signature '{}' (severity {})", name, severity);
        Ok(())
    }

    /// Evaluates a login attempt of up to `login.max_guesses` password
    /// guesses against `target`.
    ///
    /// Guesses are evaluated in order and evaluation stops at the first
    /// match; extra guesses beyond the cap are ignored.
    ///
    /// A match is explicitly NOT authentication: it creates a pending
    /// verification event and notifies the owner. Exhausting the guesses
    /// raises a `BRUTE_FORCE` alert instead. An unknown target changes no
    /// state at all.
    pub fn attempt_login(&mut self, target: &str, guesses: &[&str]) -> LoginOutcome {
        debug!("login attempt against '{}'", target);

        if !self.directory.identity_exists(target) {
            debug!("login target '{}' unknown; blocked without alert", target);
            return LoginOutcome::UnknownIdentity;
        }

        let matched = guesses
            .iter()
            .take(self.config.login.max_guesses)
            .any(|guess| self.directory.credentials_match(target, guess));

        if matched {
            let event_id = self.verifications.record(target);
            let notice = self.notify(
                target,
                categories::LOGIN_ATTEMPT,
                "A login attempt used your correct password. Confirm in your inbox if it was you.",
            );
            info!(
                "correct password for '{}'; login withheld pending verification {}",
                target, event_id
            );
            LoginOutcome::PendingVerification { event_id, notice }
        } else {
            warn!("all guesses against '{}' failed; login blocked", target);
            let alert = self.raise_alert(
                names::BRUTE_FORCE,
                UNKNOWN_ATTACKER,
                target,
                "Multiple wrong password attempts in login attack.",
            );
            let notice = self.notify(
                target,
                categories::LOGIN_FAIL,
                "Someone tried multiple wrong passwords to login to your account.",
            );
            LoginOutcome::Blocked { alert, notice }
        }
    }

    /// Opens `identity`'s inbox and resolves their pending verifications.
    ///
    /// The inbox only opens for its owner: `password` must match the
    /// identity's own credentials. On success the report carries every
    /// message (a persistent read) plus, for each pending event in creation
    /// order, the effect of the owner's answer from `respond`.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownIdentity`] or [`CoreError::InvalidCredentials`];
    /// in both cases no message is read and no event is touched.
    pub fn resolve_inbox<F>(
        &mut self,
        identity: &str,
        password: &str,
        mut respond: F,
    ) -> Result<InboxReport>
    where
        F: FnMut(&LoginVerificationEvent) -> VerificationAnswer,
    {
        if !self.directory.identity_exists(identity) {
            return Err(CoreError::UnknownIdentity(identity.to_string()));
        }
        if !self.directory.credentials_match(identity, password) {
            warn!("inbox for '{}' refused: credentials do not match", identity);
            return Err(CoreError::InvalidCredentials(identity.to_string()));
        }

        let messages = self.mailboxes.fetch(identity).to_vec();
        debug!("inbox for '{}': {} message(s)", identity, messages.len());

        let mut resolutions = Vec::new();
        for event in self.verifications.pending_for(identity) {
            let answer = respond(&event);
            let outcome = self.resolve_login(event.id, answer)?;
            resolutions.push(Resolution {
                event_id: event.id,
                outcome,
            });
        }

        Ok(InboxReport { messages, resolutions })
    }

    /// Applies the owner's answer to one pending verification event.
    ///
    /// Approval opens a session for the event's owner, the only path in
    /// the system that grants one. Denial raises a `CREDENTIAL_THEFT` alert
    /// and leaves the session untouched.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownEvent`] for an id that was never recorded;
    /// [`CoreError::AlreadyResolved`] for a second answer; prior effects
    /// are left unchanged.
    pub fn resolve_login(
        &mut self,
        event_id: Uuid,
        answer: VerificationAnswer,
    ) -> Result<ResolutionOutcome> {
        let username = self.verifications.resolve(event_id)?;

        match answer {
            VerificationAnswer::Approve => {
                self.session.open(username.clone());
                info!("verification {} approved; session open for '{}'", event_id, username);
                Ok(ResolutionOutcome::SessionOpened { identity: username })
            }
            VerificationAnswer::Deny => {
                warn!(
                    "verification {} denied by '{}'; treating as credential theft",
                    event_id, username
                );
                let alert = self.raise_alert(
                    names::CREDENTIAL_THEFT,
                    UNKNOWN_ATTACKER,
                    &username,
                    "User denied correct-password login attempt.",
                );
                Ok(ResolutionOutcome::AttemptDenied { alert })
            }
        }
    }

    /// Evaluates a request to access `target`'s data under the current
    /// session.
    ///
    /// Owners read their own data freely; anything else is denied with an
    /// `UNAUTHORIZED_ACCESS` alert attributing the attempt to the current
    /// session, or to the `"unknown"` sentinel when none is open. An
    /// unknown target is a usage error, not a security event.
    pub fn evaluate_access(&mut self, target: &str) -> AccessOutcome {
        debug!("access request for '{}' data", target);

        if !self.directory.identity_exists(target) {
            return AccessOutcome::UnknownIdentity;
        }

        match self.session.current_identity().map(str::to_owned) {
            None => {
                warn!("access to '{}' denied: no session open", target);
                let alert = self.raise_alert(
                    names::UNAUTHORIZED_ACCESS,
                    UNKNOWN_ATTACKER,
                    target,
                    "Unauthorized access attempt with no logged-in user.",
                );
                let notice = self.notify(
                    target,
                    categories::UNAUTHORIZED_ACCESS,
                    "Someone tried to access your data while no user was logged in.",
                );
                AccessOutcome::Denied {
                    attacker: UNKNOWN_ATTACKER.to_string(),
                    alert,
                    notice,
                }
            }
            Some(current) if current == target => {
                debug!("'{}' accessed own data", target);
                AccessOutcome::Allowed
            }
            Some(current) => {
                warn!("'{}' denied access to '{}' data", current, target);
                let alert = self.raise_alert(
                    names::UNAUTHORIZED_ACCESS,
                    &current,
                    target,
                    "Logged-in user attempted unauthorized data access.",
                );
                let notice = self.notify(
                    target,
                    categories::UNAUTHORIZED_ACCESS,
                    "A logged-in user tried to access your data without permission.",
                );
                AccessOutcome::Denied {
                    attacker: current,
                    alert,
                    notice,
                }
            }
        }
    }

    /// Consumes the alert queue, highest severity first.
    ///
    /// Equal severities drain in emission order. After this returns the
    /// queue is empty.
    pub fn drain_alerts(&mut self) -> Vec<Alert> {
        let drained = self.alerts.drain_all();
        info!("drained {} alert(s) for triage", drained.len());
        drained
    }

    /// Returns the current session record.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the signature catalog.
    pub fn signatures(&self) -> &SignatureRegistry {
        &self.signatures
    }

    /// Returns the verification event log.
    pub fn verifications(&self) -> &VerificationLog {
        &self.verifications
    }

    /// Returns the number of alerts currently queued.
    pub fn queued_alerts(&self) -> usize {
        self.alerts.len()
    }

    /// Returns how many messages `identity`'s mailbox currently holds.
    pub fn message_count(&self, identity: &str) -> usize {
        self.mailboxes.message_count(identity)
    }

    /// Returns the identity directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Returns the identity directory mutably, for callers that also manage
    /// registration through it.
    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// Emits an alert for `signature_name`, copying its severity out of the
    /// catalog at this moment.
    ///
    /// A missing signature or a full queue is a soft outcome: the caller
    /// continues its operation either way.
    fn raise_alert(
        &mut self,
        signature_name: &str,
        attacker: &str,
        target: &str,
        message: &str,
    ) -> AlertDisposition {
        let (name, severity) = match self.signatures.lookup(signature_name) {
            Some(signature) => (signature.name.clone(), signature.severity),
            None => {
                warn!("signature '{}' not in catalog; alert skipped", signature_name);
                return AlertDisposition::SignatureMissing;
            }
        };

        let alert = Alert::new(name, attacker, target, severity, message);
        let alert_id = alert.id;

        match self.alerts.push(alert) {
            Ok(()) => {
                debug!("alert {} queued (severity {})", alert_id, severity);
                AlertDisposition::Raised { alert_id }
            }
            Err(err) => {
                warn!("alert queue saturated: {}", err);
                AlertDisposition::QueueFull
            }
        }
    }

    /// Delivers a notification to `identity`'s mailbox, gated on the
    /// directory.
    fn notify(&mut self, identity: &str, category: &str, details: &str) -> DeliveryStatus {
        if !self.directory.identity_exists(identity) {
            debug!("notification for unknown identity '{}' dropped", identity);
            return DeliveryStatus::UnknownRecipient;
        }

        let status = self.mailboxes.deliver(identity, Message::new(category, details));
        if status == DeliveryStatus::MailboxFull {
            warn!("mailbox for '{}' full; notification dropped", identity);
        }
        status
    }
}

impl<D> std::fmt::Debug for Aegis<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aegis")
            .field("signatures", &self.signatures.len())
            .field("queued_alerts", &self.alerts.len())
            .field("verification_events", &self.verifications.len())
            .field("session_open", &self.session.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryDirectory;

    fn test_core() -> Aegis<InMemoryDirectory> {
        let mut directory = InMemoryDirectory::new();
        directory.register("alice", "hunter2");
        directory.register("bob", "swordfish");
        Aegis::new(directory)
    }

    #[test]
    fn test_core_starts_with_builtin_catalog() {
        let core = test_core();
        assert_eq!(core.signatures().len(), 3);
        assert!(!core.session().is_open());
        assert_eq!(core.queued_alerts(), 0);
    }

    #[test]
    fn test_register_signature_duplicate_rejected() {
        let mut core = test_core();
        core.register_signature(4, "PORT_SCAN", 4, "Sequential service probe.").unwrap();

        let err = core
            .register_signature(5, "PORT_SCAN", 8, "Imposter.")
            .unwrap_err();
        assert!(matches!(err, CoreError::Signature(_)));
        assert_eq!(core.signatures().lookup("PORT_SCAN").unwrap().severity, 4);
    }

    #[test]
    fn test_unknown_login_target_changes_nothing() {
        let mut core = test_core();
        let outcome = core.attempt_login("mallory", &["guess"]);

        assert_eq!(outcome, LoginOutcome::UnknownIdentity);
        assert_eq!(core.queued_alerts(), 0);
        assert!(core.verifications().is_empty());
    }

    #[test]
    fn test_correct_guess_is_not_authentication() {
        let mut core = test_core();
        let outcome = core.attempt_login("alice", &["wrong", "hunter2"]);

        assert!(outcome.is_pending());
        assert!(!core.session().is_open());
        assert_eq!(core.queued_alerts(), 0);
        assert_eq!(core.message_count("alice"), 1);
    }

    #[test]
    fn test_exhausted_guesses_raise_brute_force() {
        let mut core = test_core();
        let outcome = core.attempt_login("alice", &["a", "b", "c", "d", "e"]);

        assert!(outcome.is_blocked());
        assert_eq!(core.queued_alerts(), 1);
        assert!(core.verifications().is_empty());
        assert_eq!(core.message_count("alice"), 1);
    }

    #[test]
    fn test_guess_cap_ignores_extras() {
        let mut core = test_core();
        // The correct password arrives as the sixth guess; only five count.
        let outcome = core.attempt_login("alice", &["a", "b", "c", "d", "e", "hunter2"]);

        assert!(outcome.is_blocked());
        assert!(core.verifications().is_empty());
    }

    #[test]
    fn test_access_own_data_has_no_side_effects() {
        let mut core = test_core();
        core.attempt_login("alice", &["hunter2"]);
        core.resolve_inbox("alice", "hunter2", |_| VerificationAnswer::Approve)
            .unwrap();

        let before = core.message_count("alice");
        let outcome = core.evaluate_access("alice");

        assert!(outcome.is_allowed());
        assert_eq!(core.queued_alerts(), 0);
        assert_eq!(core.message_count("alice"), before);
    }
}
