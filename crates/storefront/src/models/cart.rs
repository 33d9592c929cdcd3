//! Cart domain types.

use rust_decimal::Decimal;
use serde::Serialize;

use saffron_core::{CartLineId, MenuItemId};

/// One menu item + quantity entry in the cart.
///
/// Invariant: at most one line per `menu_id`. Adding the same menu item
/// again merges into the existing line by incrementing its quantity.
///
/// The `id` is a per-cart counter assigned when the line is first created.
/// It is distinct from the 1-based positional id reported by listings
/// (see [`CartView`]); the two match until the first removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Internal line ID, unique within the cart.
    pub id: CartLineId,
    /// The menu item this line refers to.
    pub menu_id: MenuItemId,
    /// Name snapshot from the menu item.
    pub name: String,
    /// Unit price snapshot from the menu item.
    pub price: Decimal,
    /// Quantity, always >= 1 (a line whose quantity drops to 0 is removed).
    pub quantity: u32,
    /// Image reference snapshot.
    pub image: String,
}

/// Cart line as reported by listings.
///
/// The `id` here is positional (1-based) and stable only within one
/// listing; the internal [`CartLine::id`] is not exposed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: u32,
    pub menu_id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
}

/// Cart snapshot returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a view from internal lines, renumbering with 1-based
    /// positional ids.
    #[must_use]
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let items = lines
            .iter()
            .enumerate()
            .map(|(index, line)| CartItemView {
                id: u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1),
                menu_id: line.menu_id,
                name: line.name.clone(),
                price: line.price,
                quantity: line.quantity,
                image: line.image.clone(),
            })
            .collect();
        Self { items }
    }
}
