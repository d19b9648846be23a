//! crates/eztechpal_portal/src/auth.rs
//!
//! Implementations of the `Authenticator` port.
//!
//! The portal ships with the placeholder policy the UI advertises ("any
//! password works"). `Argon2Authenticator` is the drop-in replacement that
//! checks real credentials; swapping it in changes no operation signatures.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use eztechpal_core::ports::Authenticator;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::error;

/// Accepts any password for any account. Placeholder policy, not real
/// authentication.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyPassword;

impl Authenticator for AcceptAnyPassword {
    fn enroll(&self, _email: &str, _password: &str) {}

    fn verify(&self, _email: &str, _password: &str) -> bool {
        true
    }
}

/// Verifies presented passwords against argon2 hashes enrolled at
/// registration. Accounts that never enrolled are rejected.
#[derive(Default)]
pub struct Argon2Authenticator {
    hashes: Mutex<HashMap<String, String>>,
}

impl Argon2Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    fn hashes(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.hashes.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Authenticator for Argon2Authenticator {
    fn enroll(&self, email: &str, password: &str) {
        let salt = SaltString::generate(&mut OsRng);
        match Argon2::default().hash_password(password.as_bytes(), &salt) {
            Ok(hash) => {
                self.hashes().insert(email.to_string(), hash.to_string());
            }
            Err(e) => error!("Failed to hash password for {email}: {e}"),
        }
    }

    fn verify(&self, email: &str, password: &str) -> bool {
        let hashes = self.hashes();
        let Some(stored) = hashes.get(email) else {
            return false;
        };
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_accepts_anything() {
        let auth = AcceptAnyPassword;
        assert!(auth.verify("a@x.com", "pw"));
        assert!(auth.verify("nobody@x.com", ""));
    }

    #[test]
    fn argon2_accepts_only_the_enrolled_password() {
        let auth = Argon2Authenticator::new();
        auth.enroll("a@x.com", "correct horse");

        assert!(auth.verify("a@x.com", "correct horse"));
        assert!(!auth.verify("a@x.com", "battery staple"));
        assert!(!auth.verify("b@x.com", "correct horse"));
    }

    #[test]
    fn argon2_re_enrollment_replaces_the_credential() {
        let auth = Argon2Authenticator::new();
        auth.enroll("a@x.com", "old");
        auth.enroll("a@x.com", "new");

        assert!(!auth.verify("a@x.com", "old"));
        assert!(auth.verify("a@x.com", "new"));
    }
}
