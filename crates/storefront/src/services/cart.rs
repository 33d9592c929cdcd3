//! Cart service.
//!
//! All cart mutations write through to the backing store immediately;
//! there is no batching and no transaction. A failed mutation leaves
//! prior state intact.

use thiserror::Error;

use saffron_core::{CartLineId, MenuItemId};

use crate::models::CartView;
use crate::store::{CartStore, MenuStore, RepositoryError};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The menu item being added does not exist.
    #[error("menu item {0} not found")]
    MenuItemNotFound(MenuItemId),

    /// No cart line matched the update or removal.
    #[error("item not found in cart")]
    LineNotFound,

    /// Add requires a quantity of at least 1.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Cart operations over the shared cart store.
pub struct CartService<'a> {
    menu: &'a dyn MenuStore,
    cart: &'a dyn CartStore,
}

impl<'a> CartService<'a> {
    #[must_use]
    pub const fn new(menu: &'a dyn MenuStore, cart: &'a dyn CartStore) -> Self {
        Self { menu, cart }
    }

    /// Add `quantity` of a menu item to the cart.
    ///
    /// Merges into the existing line for the same item if present, so
    /// the cart never holds two lines for one menu item. Returns the
    /// updated cart snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidQuantity` for a zero quantity and
    /// `CartError::MenuItemNotFound` if the menu id is unknown.
    pub async fn add(&self, menu_id: MenuItemId, quantity: u32) -> Result<CartView, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let item = self
            .menu
            .get(menu_id)
            .await?
            .ok_or(CartError::MenuItemNotFound(menu_id))?;

        let lines = self.cart.add(&item, quantity).await?;
        Ok(CartView::from_lines(&lines))
    }

    /// Set the quantity of the line for `menu_id` exactly (not
    /// additive). A quantity of zero or less removes the line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if no line matches, a reported
    /// failure so callers can tell "ok" from "nothing to update".
    pub async fn update_quantity(
        &self,
        menu_id: MenuItemId,
        quantity: i32,
    ) -> Result<(), CartError> {
        if self.cart.update_quantity(menu_id, quantity).await? {
            Ok(())
        } else {
            Err(CartError::LineNotFound)
        }
    }

    /// Remove a line by its internal id.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if no line matches.
    pub async fn remove(&self, line_id: CartLineId) -> Result<(), CartError> {
        if self.cart.remove(line_id).await? {
            Ok(())
        } else {
            Err(CartError::LineNotFound)
        }
    }

    /// Empty the cart. Idempotent; clearing an empty cart is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the store fails.
    pub async fn clear(&self) -> Result<(), CartError> {
        Ok(self.cart.clear().await?)
    }

    /// Current cart snapshot with 1-based positional line ids.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the store fails.
    pub async fn list(&self) -> Result<CartView, CartError> {
        let lines = self.cart.lines().await?;
        Ok(CartView::from_lines(&lines))
    }
}
