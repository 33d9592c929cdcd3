//! Customer profile route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{CustomerProfile, CustomerUpdate};
use crate::services::CustomerService;
use crate::state::AppState;

/// Query parameters identifying the customer.
#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    pub email: Option<String>,
}

impl CustomerQuery {
    fn email(&self) -> Result<&str> {
        self.email
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::BadRequest("Email is required".to_owned()))
    }
}

/// Fetch the profile for an email, creating it lazily if absent.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
) -> Result<Json<CustomerProfile>> {
    let service = CustomerService::new(state.customers(), state.users());
    let profile = service.get_or_create(query.email()?).await?;
    Ok(Json(profile))
}

/// Merge the provided fields into an existing profile.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
    Json(req): Json<CustomerUpdate>,
) -> Result<Json<CustomerProfile>> {
    let service = CustomerService::new(state.customers(), state.users());
    let profile = service.update(query.email()?, req).await?;
    Ok(Json(profile))
}
