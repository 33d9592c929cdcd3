//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-class errors
//! to Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Every failure surfaces to the caller as a
//! JSON `{"message": ...}` body; nothing is retried and nothing is
//! fatal to the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::{AuthError, CartError, CatalogError, CustomerError, OrderError};
use crate::store::RepositoryError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Menu catalog lookup failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart operation failed.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Order operation failed.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Customer profile operation failed.
    #[error("customer error: {0}")]
    Customer(#[from] CustomerError),

    /// Storage layer failed outside a service call.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Catalog(err) => match err {
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Cart(err) => match err {
                CartError::MenuItemNotFound(_) | CartError::LineNotFound => StatusCode::NOT_FOUND,
                CartError::InvalidQuantity => StatusCode::BAD_REQUEST,
                CartError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Order(err) => match err {
                OrderError::Empty | OrderError::InvalidLine(_) => StatusCode::BAD_REQUEST,
                OrderError::NotFound(_) => StatusCode::NOT_FOUND,
                OrderError::InvalidTransition { .. } => StatusCode::BAD_REQUEST,
                OrderError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Auth(err) => match err {
                // The OTP contract reports all verification failures as 400
                AuthError::InvalidEmail(_)
                | AuthError::MissingName
                | AuthError::WeakPassword(_)
                | AuthError::OtpNotFound
                | AuthError::OtpExpired
                | AuthError::OtpInvalid => StatusCode::BAD_REQUEST,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::PasswordHash | AuthError::Delivery(_) | AuthError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Customer(err) => match err {
                CustomerError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                CustomerError::NotFound => StatusCode::NOT_FOUND,
                CustomerError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Repository(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details are not exposed.
    fn message(&self) -> String {
        if self.status() == StatusCode::INTERNAL_SERVER_ERROR {
            return "Internal server error".to_owned();
        }

        match self {
            Self::Catalog(CatalogError::NotFound(_)) => "Menu item not found".to_owned(),
            Self::Cart(err) => match err {
                CartError::MenuItemNotFound(_) => "Menu item not found".to_owned(),
                CartError::LineNotFound => "Item not found in cart".to_owned(),
                other => other.to_string(),
            },
            Self::Order(OrderError::Empty) => "Invalid order items".to_owned(),
            Self::Auth(err) => match err {
                AuthError::UserAlreadyExists => "Email already exists.".to_owned(),
                AuthError::InvalidCredentials => "Invalid email or password.".to_owned(),
                AuthError::OtpNotFound => "No OTP found for this email.".to_owned(),
                AuthError::OtpExpired => "OTP expired.".to_owned(),
                AuthError::OtpInvalid => "Invalid OTP.".to_owned(),
                other => other.to_string(),
            },
            Self::Customer(CustomerError::NotFound) => "Customer not found".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = Json(serde_json::json!({ "message": self.message() }));
        (status, body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
