//! User account and OTP domain types.

use chrono::{DateTime, Utc};

use saffron_core::Email;

/// A registered account.
///
/// Accounts start unverified and are activated by the signup OTP flow.
/// The password is stored as an Argon2id PHC hash, never in the clear.
#[derive(Clone)]
pub struct UserAccount {
    /// Account email, the registry key.
    pub email: Email,
    /// Display name given at registration.
    pub name: String,
    /// Argon2id PHC-format password hash.
    pub password_hash: String,
    /// Whether the signup OTP has been confirmed.
    pub verified: bool,
}

impl std::fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAccount")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password_hash", &"[REDACTED]")
            .field("verified", &self.verified)
            .finish()
    }
}

/// An outstanding one-time code for an email address.
///
/// At most one record exists per email; a new request overwrites the
/// prior one. Records are deleted on successful verification and on
/// detected expiry, but retained on a code mismatch so the user can
/// retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    /// Email the code was issued for, the registry key.
    pub email: Email,
    /// Six-digit numeric code.
    pub otp: String,
    /// Expiry instant; compared against wall-clock time, no grace period.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password_hash() {
        let account = UserAccount {
            email: Email::parse("a@b.com").expect("valid email"),
            name: "A".to_owned(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_owned(),
            verified: false,
        };
        let output = format!("{account:?}");
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("argon2id"));
    }
}
