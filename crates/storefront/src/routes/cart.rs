//! Cart route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use saffron_core::{CartLineId, MenuItemId};

use crate::error::Result;
use crate::models::{CartView, Order};
use crate::services::{CartService, OrderService};
use crate::state::AppState;

/// Add to cart request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub menu_id: MenuItemId,
    pub quantity: u32,
}

/// Update cart quantity request. A quantity of zero or less removes the
/// line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub menu_id: MenuItemId,
    pub quantity: i32,
}

/// Remove from cart request, keyed by the line id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub cart_item_id: CartLineId,
}

/// Checkout request: the menu ids of the selected cart lines.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub menu_ids: Vec<MenuItemId>,
}

/// Cart snapshot response.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub cart: CartView,
}

/// Cart mutation response with the updated snapshot.
#[derive(Debug, Serialize)]
pub struct CartMutationResponse {
    pub message: &'static str,
    pub cart: CartView,
}

/// Simple message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Checkout response with the placed order.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub message: &'static str,
    pub order: Order,
}

/// Current cart snapshot.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartResponse>> {
    let service = CartService::new(state.menu(), state.cart());
    let cart = service.list().await?;
    Ok(Json(CartResponse { cart }))
}

/// Add an item to the cart, merging into an existing line for the same
/// menu item.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartMutationResponse>> {
    let service = CartService::new(state.menu(), state.cart());
    let cart = service.add(req.menu_id, req.quantity).await?;
    Ok(Json(CartMutationResponse {
        message: "Item added to cart successfully",
        cart,
    }))
}

/// Set a line's quantity exactly; zero or less removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateCartRequest>,
) -> Result<Json<MessageResponse>> {
    let service = CartService::new(state.menu(), state.cart());
    service.update_quantity(req.menu_id, req.quantity).await?;
    Ok(Json(MessageResponse {
        message: "Cart updated successfully",
    }))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<RemoveFromCartRequest>,
) -> Result<Json<MessageResponse>> {
    let service = CartService::new(state.menu(), state.cart());
    service.remove(req.cart_item_id).await?;
    Ok(Json(MessageResponse {
        message: "Item removed from cart successfully",
    }))
}

/// Empty the cart. Idempotent.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    let service = CartService::new(state.menu(), state.cart());
    service.clear().await?;
    Ok(Json(MessageResponse {
        message: "Cart cleared successfully",
    }))
}

/// Place an order from the selected cart lines and prune them from the
/// cart.
#[instrument(skip(state))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let service = OrderService::new(state.orders(), state.cart());
    let order = service.checkout(&req.menu_ids).await?;
    Ok(Json(CheckoutResponse {
        message: "Order placed successfully",
        order,
    }))
}
