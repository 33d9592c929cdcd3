//! One-time code delivery.
//!
//! Delivery is a collaborator so the auth service never knows whether
//! codes go out by email, SMS, or (here) the process log. A real
//! deployment substitutes an SMTP- or provider-backed implementation.

use async_trait::async_trait;
use thiserror::Error;

use saffron_core::Email;

/// Errors from a delivery channel.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The channel failed to hand off the code.
    #[error("failed to deliver code: {0}")]
    Failed(String),
}

/// Hands a freshly issued one-time code to the account holder.
#[async_trait]
pub trait OtpDelivery: Send + Sync {
    /// Deliver `code` to the owner of `email`.
    async fn deliver(&self, email: &Email, code: &str) -> Result<(), DeliveryError>;
}

/// Delivery channel that writes the code to the process log.
///
/// Stands in where no mail transport is configured. Logging a live
/// credential is acceptable only because this serves local development;
/// swap in a real channel before exposing the API.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOtpDelivery;

#[async_trait]
impl OtpDelivery for LogOtpDelivery {
    async fn deliver(&self, email: &Email, code: &str) -> Result<(), DeliveryError> {
        tracing::info!(email = %email, code, "one-time code issued (no delivery channel configured)");
        Ok(())
    }
}
