//! Credential verification seam.

/// Checks a username/password pair.
///
/// Implementations must be total over all string inputs: any pair yields a
/// plain accept/reject, never an error.
pub trait CredentialVerifier {
    /// Returns `true` when the pair is valid.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Default demo username accepted by [`FixedCredentials`].
pub const DEFAULT_USERNAME: &str = "user";
/// Default demo password accepted by [`FixedCredentials`].
pub const DEFAULT_PASSWORD: &str = "pass";

/// Verifier holding one fixed credential pair.
///
/// Exact equality only: no hashing, no lockout, no rate limiting. This is
/// the demo-grade backend the app ships with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCredentials {
    username: String,
    password: String,
}

impl FixedCredentials {
    /// Creates a verifier for the given pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
