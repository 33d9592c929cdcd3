//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use saffron_core::{OrderId, OrderStatus};

use crate::error::Result;
use crate::models::{Order, OrderLineInput};
use crate::services::OrderService;
use crate::state::AppState;

/// Order creation request.
///
/// `items` is optional so a missing field reports the same "invalid
/// order items" failure as an empty list.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Option<Vec<OrderLineInput>>,
}

/// Status change request.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Order mutation response.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub message: &'static str,
    pub order: Order,
}

/// Place an order from explicit line inputs.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>> {
    let service = OrderService::new(state.orders(), state.cart());
    let order = service.place(req.items.unwrap_or_default()).await?;
    Ok(Json(OrderResponse {
        message: "Order placed successfully",
        order,
    }))
}

/// Ledger snapshot, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let service = OrderService::new(state.orders(), state.cart());
    Ok(Json(service.list().await?))
}

/// Cancel an open order.
#[instrument(skip(state))]
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>> {
    let service = OrderService::new(state.orders(), state.cart());
    let order = service.cancel(OrderId::new(id)).await?;
    Ok(Json(OrderResponse {
        message: "Order cancelled successfully",
        order,
    }))
}

/// Change an order's status. Used to simulate payment completion
/// (`pending` -> `completed`); transitions out of terminal states are
/// rejected.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<OrderResponse>> {
    let service = OrderService::new(state.orders(), state.cart());
    let order = service.update_status(OrderId::new(id), req.status).await?;
    Ok(Json(OrderResponse {
        message: "Order status updated successfully",
        order,
    }))
}
