//! Menu catalog domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use saffron_core::MenuItemId;

/// A catering menu item.
///
/// Menu items are immutable seed data: the catalog is loaded once at
/// startup and never created or deleted at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique, stable item ID.
    pub id: MenuItemId,
    /// Display name (e.g., "Breakfast Buffet").
    pub name: String,
    /// Longer marketing description.
    pub description: String,
    /// Unit price. Serialized as a decimal string to preserve precision.
    pub price: Decimal,
    /// Category label (e.g., "Buffet", "Packages").
    pub category: String,
    /// Whether the item can currently be ordered.
    pub available: bool,
    /// Image reference (filename or URL).
    pub image: String,
}
