//! Authentication service.
//!
//! Registration is OTP-gated: accounts start unverified, a six-digit
//! code is issued on request, and confirming the code activates the
//! account. Password reset rides the same OTP registry. Per-email OTP
//! state moves `NoOtp -> Issued -> Consumed`; a mismatched code leaves
//! the record in place for retry, while success and detected expiry
//! both delete it.

mod delivery;
mod error;

pub use delivery::{DeliveryError, LogOtpDelivery, OtpDelivery};
pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use saffron_core::Email;

use crate::models::{OtpRecord, UserAccount};
use crate::store::{OtpStore, RepositoryError, UserStore};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles registration, credential validation, the OTP flow, and
/// password reset.
pub struct AuthService<'a> {
    users: &'a dyn UserStore,
    otps: &'a dyn OtpStore,
    delivery: &'a dyn OtpDelivery,
    otp_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(
        users: &'a dyn UserStore,
        otps: &'a dyn OtpStore,
        delivery: &'a dyn OtpDelivery,
        otp_ttl: Duration,
    ) -> Self {
        Self {
            users,
            otps,
            delivery,
            otp_ttl,
        }
    }

    // =========================================================================
    // Registration & credentials
    // =========================================================================

    /// Register a new account.
    ///
    /// The account starts unverified; the signup OTP flow activates it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::MissingName` for a blank name.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<(), AuthError> {
        let email = Email::parse(email)?;

        if name.trim().is_empty() {
            return Err(AuthError::MissingName);
        }

        validate_password(password)?;
        let password_hash = hash_password(password)?;

        self.users
            .insert(UserAccount {
                email,
                name: name.trim().to_owned(),
                password_hash,
                verified: false,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })
    }

    /// Validate credentials for sign-in.
    ///
    /// Succeeds only when the password matches AND the account has been
    /// verified. The error does not distinguish which check failed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any mismatch.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserAccount, AuthError> {
        let email = Email::parse(email)?;

        let account = self
            .users
            .get(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)?;

        if !account.verified {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account)
    }

    // =========================================================================
    // OTP flow
    // =========================================================================

    /// Issue a one-time code for `email`, overwriting any outstanding
    /// record, and hand it to the delivery channel.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed address and
    /// `AuthError::Delivery` if the channel fails.
    pub async fn request_otp(&self, email: &str) -> Result<(), AuthError> {
        let email = Email::parse(email)?;
        let code = generate_otp();

        self.otps
            .put(OtpRecord {
                email: email.clone(),
                otp: code.clone(),
                expires_at: Utc::now() + self.otp_ttl,
            })
            .await?;

        self.delivery.deliver(&email, &code).await?;
        Ok(())
    }

    /// Verify the signup code and activate the account.
    ///
    /// Verification that succeeds for an email with no registered
    /// account still consumes the code; there is simply nothing to
    /// activate (the reset flow uses the same registry).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::OtpNotFound`, `AuthError::OtpExpired`, or
    /// `AuthError::OtpInvalid` per the consumption rules.
    pub async fn verify_signup_otp(&self, email: &str, code: &str) -> Result<(), AuthError> {
        let email = Email::parse(email)?;
        self.consume_otp(&email, code).await?;

        let activated = self.users.set_verified(&email).await?;
        if !activated {
            tracing::debug!(email = %email, "signup code verified for email with no account");
        }
        Ok(())
    }

    /// Verify a reset code and replace the account's password.
    ///
    /// The code is consumed on success; a second reset needs a fresh
    /// code.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` for an unknown account,
    /// `AuthError::WeakPassword` for an invalid new password, and the
    /// OTP errors per the consumption rules.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &SecretString,
    ) -> Result<(), AuthError> {
        let email = Email::parse(email)?;
        validate_password(new_password)?;

        if self.users.get(&email).await?.is_none() {
            return Err(AuthError::UserNotFound);
        }

        self.consume_otp(&email, code).await?;

        let password_hash = hash_password(new_password)?;
        self.users.set_password_hash(&email, password_hash).await?;
        Ok(())
    }

    /// Check a code against the outstanding record for `email`.
    ///
    /// Deletes the record on success and on detected expiry; retains it
    /// on a mismatch so the user can retry.
    async fn consume_otp(&self, email: &Email, code: &str) -> Result<(), AuthError> {
        let record = self.otps.get(email).await?.ok_or(AuthError::OtpNotFound)?;

        if Utc::now() > record.expires_at {
            self.otps.delete(email).await?;
            return Err(AuthError::OtpExpired);
        }

        if record.otp != code {
            return Err(AuthError::OtpInvalid);
        }

        self.otps.delete(email).await?;
        Ok(())
    }
}

/// Generate a six-digit numeric code.
fn generate_otp() -> String {
    let code: u32 = rand::rng().random_range(100_000..1_000_000);
    code.to_string()
}

/// Validate password meets requirements.
fn validate_password(password: &SecretString) -> Result<(), AuthError> {
    if password.expose_secret().len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &SecretString) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &SecretString, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.expose_secret().as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryOtpStore, InMemoryUserStore};

    fn ttl() -> Duration {
        Duration::minutes(10)
    }

    fn password(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    fn email(s: &str) -> Email {
        Email::parse(s).expect("valid email")
    }

    async fn issued_code(otps: &InMemoryOtpStore, address: &str) -> String {
        otps.get(&email(address))
            .await
            .expect("get")
            .expect("record present")
            .otp
    }

    #[tokio::test]
    async fn test_register_stores_hashed_unverified_account() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        auth.register("Maya", "maya@example.com", &password("hunter2hunter2"))
            .await
            .expect("register");

        let account = users
            .get(&email("maya@example.com"))
            .await
            .expect("get")
            .expect("present");
        assert!(!account.verified);
        assert_ne!(account.password_hash, "hunter2hunter2");
        assert!(account.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_weak_and_blank() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        auth.register("Maya", "maya@example.com", &password("hunter2hunter2"))
            .await
            .expect("register");

        assert!(matches!(
            auth.register("Maya", "maya@example.com", &password("hunter2hunter2"))
                .await,
            Err(AuthError::UserAlreadyExists)
        ));
        assert!(matches!(
            auth.register("Rio", "rio@example.com", &password("short"))
                .await,
            Err(AuthError::WeakPassword(_))
        ));
        assert!(matches!(
            auth.register("  ", "blank@example.com", &password("hunter2hunter2"))
                .await,
            Err(AuthError::MissingName)
        ));
    }

    #[tokio::test]
    async fn test_login_requires_verification() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        auth.register("Maya", "maya@example.com", &password("hunter2hunter2"))
            .await
            .expect("register");

        // Correct password, but the account is not yet verified
        assert!(matches!(
            auth.validate_credentials("maya@example.com", &password("hunter2hunter2"))
                .await,
            Err(AuthError::InvalidCredentials)
        ));

        // Activate via the signup OTP flow, then login succeeds
        auth.request_otp("maya@example.com").await.expect("request");
        let code = issued_code(&otps, "maya@example.com").await;
        auth.verify_signup_otp("maya@example.com", &code)
            .await
            .expect("verify");

        let account = auth
            .validate_credentials("maya@example.com", &password("hunter2hunter2"))
            .await
            .expect("login");
        assert!(account.verified);

        // Wrong password still fails
        assert!(matches!(
            auth.validate_credentials("maya@example.com", &password("wrong-password"))
                .await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_otp_is_six_numeric_digits_with_ttl_expiry() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        let before = Utc::now();
        auth.request_otp("a@b.com").await.expect("request");
        let record = otps
            .get(&email("a@b.com"))
            .await
            .expect("get")
            .expect("present");

        assert_eq!(record.otp.len(), 6);
        assert!(record.otp.chars().all(|c| c.is_ascii_digit()));

        // expiry == issuance + 600s, within test slack
        let expected = before + ttl();
        let slack = Duration::seconds(5);
        assert!(record.expires_at >= expected - slack);
        assert!(record.expires_at <= expected + slack);
    }

    #[tokio::test]
    async fn test_otp_verify_consumes_record() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        auth.request_otp("a@b.com").await.expect("request");
        let code = issued_code(&otps, "a@b.com").await;

        auth.verify_signup_otp("a@b.com", &code)
            .await
            .expect("verify");

        // Second verification with the same code: record is gone
        assert!(matches!(
            auth.verify_signup_otp("a@b.com", &code).await,
            Err(AuthError::OtpNotFound)
        ));
    }

    #[tokio::test]
    async fn test_otp_mismatch_retains_record_for_retry() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        auth.request_otp("a@b.com").await.expect("request");
        let code = issued_code(&otps, "a@b.com").await;

        let wrong = if code == "000000" { "000001" } else { "000000" };
        assert!(matches!(
            auth.verify_signup_otp("a@b.com", wrong).await,
            Err(AuthError::OtpInvalid)
        ));

        // Retry with the right code still works
        auth.verify_signup_otp("a@b.com", &code)
            .await
            .expect("retry verify");
    }

    #[tokio::test]
    async fn test_otp_expired_record_is_deleted() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        otps.put(OtpRecord {
            email: email("a@b.com"),
            otp: "123456".to_owned(),
            expires_at: Utc::now() - Duration::seconds(1),
        })
        .await
        .expect("put");

        assert!(matches!(
            auth.verify_signup_otp("a@b.com", "123456").await,
            Err(AuthError::OtpExpired)
        ));
        // Expiry detection removed the record
        assert!(matches!(
            auth.verify_signup_otp("a@b.com", "123456").await,
            Err(AuthError::OtpNotFound)
        ));
    }

    #[tokio::test]
    async fn test_new_request_overwrites_outstanding_code() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        auth.request_otp("a@b.com").await.expect("request");
        let first = issued_code(&otps, "a@b.com").await;
        auth.request_otp("a@b.com").await.expect("request again");
        let second = issued_code(&otps, "a@b.com").await;

        if first != second {
            assert!(matches!(
                auth.verify_signup_otp("a@b.com", &first).await,
                Err(AuthError::OtpInvalid)
            ));
        }
        auth.verify_signup_otp("a@b.com", &second)
            .await
            .expect("verify latest");
    }

    #[tokio::test]
    async fn test_reset_password_consumes_otp_and_changes_hash() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        auth.register("Maya", "maya@example.com", &password("hunter2hunter2"))
            .await
            .expect("register");
        auth.request_otp("maya@example.com").await.expect("request");
        let code = issued_code(&otps, "maya@example.com").await;
        auth.verify_signup_otp("maya@example.com", &code)
            .await
            .expect("activate");

        auth.request_otp("maya@example.com").await.expect("request");
        let code = issued_code(&otps, "maya@example.com").await;
        auth.reset_password("maya@example.com", &code, &password("new-password-1"))
            .await
            .expect("reset");

        // Old password no longer works, new one does
        assert!(matches!(
            auth.validate_credentials("maya@example.com", &password("hunter2hunter2"))
                .await,
            Err(AuthError::InvalidCredentials)
        ));
        auth.validate_credentials("maya@example.com", &password("new-password-1"))
            .await
            .expect("login with new password");

        // The reset code was consumed
        assert!(matches!(
            auth.reset_password("maya@example.com", &code, &password("another-pass-1"))
                .await,
            Err(AuthError::OtpNotFound)
        ));
    }

    #[tokio::test]
    async fn test_reset_password_unknown_account() {
        let users = InMemoryUserStore::new();
        let otps = InMemoryOtpStore::new();
        let auth = AuthService::new(&users, &otps, &LogOtpDelivery, ttl());

        assert!(matches!(
            auth.reset_password("ghost@example.com", "123456", &password("new-password-1"))
                .await,
            Err(AuthError::UserNotFound)
        ));
    }
}
