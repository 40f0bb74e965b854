//! Session store: the authentication flag and its two transitions.

use crate::session::verifier::{CredentialVerifier, FixedCredentials};
use log::{debug, info};

/// Boolean authentication state machine behind the login screen.
///
/// The store starts logged out. The only way in is a successful `login`
/// through the configured verifier; the only way out is `logout`. Every
/// operation is synchronous and total over string inputs.
#[derive(Debug, Clone)]
pub struct SessionStore<V = FixedCredentials> {
    verifier: V,
    authenticated: bool,
}

impl SessionStore<FixedCredentials> {
    /// Creates a store using the fixed demo credential pair.
    pub fn new() -> Self {
        Self::with_verifier(FixedCredentials::default())
    }
}

impl Default for SessionStore<FixedCredentials> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CredentialVerifier> SessionStore<V> {
    /// Creates a store using the provided verifier implementation.
    pub fn with_verifier(verifier: V) -> Self {
        Self {
            verifier,
            authenticated: false,
        }
    }

    /// Attempts a login with the given pair.
    ///
    /// # Contract
    /// - On verifier match: sets the flag and returns `true`.
    /// - Otherwise: state is unchanged and the call returns `false`.
    ///   Rejection is the result value, not an error.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if self.verifier.verify(username, password) {
            self.authenticated = true;
            info!(
                "event=login module=session status=ok username_len={}",
                username.len()
            );
            true
        } else {
            debug!(
                "event=login module=session status=rejected username_len={}",
                username.len()
            );
            false
        }
    }

    /// Clears the authentication flag unconditionally (idempotent).
    pub fn logout(&mut self) {
        self.authenticated = false;
        info!("event=logout module=session status=ok");
    }

    /// Pure read of the authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::SessionStore;
    use crate::session::verifier::CredentialVerifier;

    struct AcceptAll;

    impl CredentialVerifier for AcceptAll {
        fn verify(&self, _username: &str, _password: &str) -> bool {
            true
        }
    }

    #[test]
    fn starts_logged_out() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn rejected_login_leaves_state_unchanged() {
        let mut store = SessionStore::new();
        assert!(!store.login("user", "wrong"));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn custom_verifier_drives_the_transition() {
        let mut store = SessionStore::with_verifier(AcceptAll);
        assert!(store.login("anyone", "anything"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = SessionStore::new();
        assert!(store.login("user", "pass"));
        store.logout();
        store.logout();
        assert!(!store.is_authenticated());
    }
}
