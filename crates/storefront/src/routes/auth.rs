//! Authentication route handlers.
//!
//! Passwords arrive as `SecretString` so they never show up in debug
//! output or traces.

use axum::{Json, extract::State};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// Login request.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

/// OTP request.
#[derive(Debug, Deserialize)]
pub struct OtpRequest {
    pub email: String,
}

/// OTP verification request.
#[derive(Debug, Deserialize)]
pub struct OtpVerifyRequest {
    pub email: String,
    pub otp: String,
}

/// Password reset request: a fresh one-time code authorizes the change.
#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub password: SecretString,
}

/// Simple message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(
        state.users(),
        state.otps(),
        state.otp_delivery(),
        state.config().otp_ttl(),
    )
}

/// Register a new account. The account stays inactive until the signup
/// code is verified.
#[instrument(skip(state, req))]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>> {
    auth_service(&state)
        .register(&req.name, &req.email, &req.password)
        .await?;
    Ok(Json(MessageResponse {
        message: "Registration successful. Verify your email to activate the account.",
    }))
}

/// Validate credentials.
#[instrument(skip(state, req))]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<MessageResponse>> {
    auth_service(&state)
        .validate_credentials(&req.email, &req.password)
        .await?;
    Ok(Json(MessageResponse {
        message: "Signed in successfully.",
    }))
}

/// Issue a one-time code for the email, overwriting any outstanding
/// code.
#[instrument(skip(state))]
pub async fn request_otp(
    State(state): State<AppState>,
    Json(req): Json<OtpRequest>,
) -> Result<Json<MessageResponse>> {
    auth_service(&state).request_otp(&req.email).await?;
    Ok(Json(MessageResponse {
        message: "OTP sent successfully.",
    }))
}

/// Verify the signup code and activate the account.
#[instrument(skip(state, req))]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<OtpVerifyRequest>,
) -> Result<Json<MessageResponse>> {
    auth_service(&state)
        .verify_signup_otp(&req.email, &req.otp)
        .await?;
    Ok(Json(MessageResponse {
        message: "OTP verified successfully. Account activated.",
    }))
}

/// Reset the account password using a one-time code.
#[instrument(skip(state, req))]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>> {
    auth_service(&state)
        .reset_password(&req.email, &req.otp, &req.password)
        .await?;
    Ok(Json(MessageResponse {
        message: "Password reset successfully.",
    }))
}
