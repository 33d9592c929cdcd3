//! Authentication error types.

use thiserror::Error;

use crate::store::RepositoryError;

use super::delivery::DeliveryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] saffron_core::EmailError),

    /// Registration requires a non-empty name.
    #[error("name is required")]
    MissingName,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// User already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Invalid credentials (wrong password, unknown or unverified user).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User not found.
    #[error("user not found")]
    UserNotFound,

    /// No outstanding one-time code for this email.
    #[error("no OTP found for this email")]
    OtpNotFound,

    /// The one-time code has expired.
    #[error("OTP expired")]
    OtpExpired,

    /// The one-time code does not match.
    #[error("invalid OTP")]
    OtpInvalid,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// One-time code delivery failed.
    #[error("otp delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}
