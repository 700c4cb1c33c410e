//! Credential verification.
//!
//! Authentication is modelled as a pluggable capability so the placeholder
//! single-credential scheme can be swapped for a real implementation without
//! touching request handling.

/// Verifies a username/password pair.
pub trait CredentialVerifier: Send + Sync {
    /// Returns true if the pair matches a known credential.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Verifier backed by a single configured credential pair.
///
/// This is a placeholder scheme: plaintext comparison, no hashing, no
/// lockout, no rate limiting.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Creates a verifier for the given credential pair.
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> StaticCredentials {
        StaticCredentials::new("admin".into(), "admin123".into())
    }

    #[test]
    fn test_matching_pair_accepted() {
        assert!(verifier().verify("admin", "admin123"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        assert!(!verifier().verify("admin", "wrong"));
    }

    #[test]
    fn test_wrong_username_rejected() {
        assert!(!verifier().verify("root", "admin123"));
    }

    #[test]
    fn test_both_fields_checked() {
        // Password matching the username field (and vice versa) must not pass.
        assert!(!verifier().verify("admin123", "admin"));
        assert!(!verifier().verify("", ""));
    }
}
