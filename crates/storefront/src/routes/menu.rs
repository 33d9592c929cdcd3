//! Menu catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use saffron_core::MenuItemId;

use crate::error::Result;
use crate::models::MenuItem;
use crate::services::CatalogService;
use crate::state::AppState;

/// Query parameters for the catalog listing.
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Case-insensitive substring filter over name, description, and
    /// category. Absent or empty returns the full catalog.
    pub search: Option<String>,
}

/// List the catalog, optionally filtered by a search term.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Vec<MenuItem>>> {
    let catalog = CatalogService::new(state.menu());
    let items = match query.search.as_deref() {
        Some(term) => catalog.search(term).await?,
        None => catalog.list_all().await?,
    };
    Ok(Json(items))
}

/// Fetch a single menu item.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MenuItem>> {
    let catalog = CatalogService::new(state.menu());
    let item = catalog.get_by_id(MenuItemId::new(id)).await?;
    Ok(Json(item))
}
