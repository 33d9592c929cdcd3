//! Order domain types.
//!
//! Orders use snapshot semantics: line prices are copied from the cart
//! at checkout time and never refreshed, so later menu price changes do
//! not retroactively affect placed orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use saffron_core::{MenuItemId, OrderId, OrderStatus};

/// An immutable snapshot of a cart line captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// The menu item ordered.
    pub menu_item_id: MenuItemId,
    /// Quantity ordered, always >= 1.
    pub quantity: u32,
    /// Unit price at order time.
    pub price: Decimal,
    /// Line total: `price * quantity`, computed at order time.
    pub total: Decimal,
}

/// Input shape for one order line, before totals are computed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
    pub price: Decimal,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Ledger-assigned ID (millisecond timestamp, forced monotonic).
    pub id: OrderId,
    /// Line snapshots, in the order they were submitted.
    pub items: Vec<OrderLine>,
    /// Lifecycle status; starts at `pending`.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Order total: sum of line totals, computed once at creation.
    pub total: Decimal,
}
