//! Cart store.
//!
//! The cart is a single process-wide collection of lines. Merge-on-add is
//! enforced here so the "at most one line per menu item" invariant holds
//! under a single lock acquisition.

use std::sync::RwLock;

use async_trait::async_trait;

use saffron_core::{CartLineId, MenuItemId};

use super::RepositoryError;
use crate::models::{CartLine, MenuItem};

/// Mutable access to the cart's lines.
///
/// Mutators report "not found" as `Ok(false)` rather than an error so
/// callers can distinguish "ok" from "nothing to update" without
/// exception-style control flow.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Current lines, in insertion order.
    async fn lines(&self) -> Result<Vec<CartLine>, RepositoryError>;

    /// Add `quantity` of a menu item, merging into an existing line for
    /// the same item if present. Returns the updated lines.
    async fn add(&self, item: &MenuItem, quantity: u32) -> Result<Vec<CartLine>, RepositoryError>;

    /// Set the quantity of the line for `menu_id` exactly. A quantity
    /// of zero or less removes the line. Returns `false` if no line
    /// matches.
    async fn update_quantity(
        &self,
        menu_id: MenuItemId,
        quantity: i32,
    ) -> Result<bool, RepositoryError>;

    /// Remove a line by its internal id. Returns `false` if absent.
    async fn remove(&self, line_id: CartLineId) -> Result<bool, RepositoryError>;

    /// Remove every line for the given menu items. Used by checkout to
    /// prune purchased lines. Returns the removed lines.
    async fn remove_by_menu_ids(
        &self,
        menu_ids: &[MenuItemId],
    ) -> Result<Vec<CartLine>, RepositoryError>;

    /// Empty the cart unconditionally. Idempotent.
    async fn clear(&self) -> Result<(), RepositoryError>;
}

#[derive(Default)]
struct CartState {
    lines: Vec<CartLine>,
    next_line_id: i32,
}

/// In-memory cart store.
#[derive(Default)]
pub struct InMemoryCartStore {
    state: RwLock<CartState>,
}

impl InMemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn lines(&self) -> Result<Vec<CartLine>, RepositoryError> {
        let state = self.state.read()?;
        Ok(state.lines.clone())
    }

    async fn add(&self, item: &MenuItem, quantity: u32) -> Result<Vec<CartLine>, RepositoryError> {
        let mut state = self.state.write()?;

        if let Some(line) = state.lines.iter_mut().find(|line| line.menu_id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            state.next_line_id += 1;
            let line = CartLine {
                id: CartLineId::new(state.next_line_id),
                menu_id: item.id,
                name: item.name.clone(),
                price: item.price,
                quantity,
                image: item.image.clone(),
            };
            state.lines.push(line);
        }

        Ok(state.lines.clone())
    }

    async fn update_quantity(
        &self,
        menu_id: MenuItemId,
        quantity: i32,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state.write()?;

        let Some(index) = state.lines.iter().position(|line| line.menu_id == menu_id) else {
            return Ok(false);
        };

        if quantity <= 0 {
            state.lines.remove(index);
        } else if let Some(line) = state.lines.get_mut(index) {
            line.quantity = u32::try_from(quantity).unwrap_or(1);
        }

        Ok(true)
    }

    async fn remove(&self, line_id: CartLineId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write()?;
        let before = state.lines.len();
        state.lines.retain(|line| line.id != line_id);
        Ok(state.lines.len() < before)
    }

    async fn remove_by_menu_ids(
        &self,
        menu_ids: &[MenuItemId],
    ) -> Result<Vec<CartLine>, RepositoryError> {
        let mut state = self.state.write()?;
        let (removed, kept): (Vec<CartLine>, Vec<CartLine>) = state
            .lines
            .drain(..)
            .partition(|line| menu_ids.contains(&line.menu_id));
        state.lines = kept;
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        let mut state = self.state.write()?;
        state.lines.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn menu_item(id: i32, cents: i64) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: format!("item-{id}"),
            description: String::new(),
            price: Decimal::new(cents, 2),
            category: "Test".to_owned(),
            available: true,
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_add_merges_by_menu_id() {
        let store = InMemoryCartStore::new();
        store.add(&menu_item(1, 1000), 2).await.expect("add");
        let lines = store.add(&menu_item(1, 1000), 3).await.expect("add");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_add_assigns_fresh_line_ids() {
        let store = InMemoryCartStore::new();
        store.add(&menu_item(1, 1000), 1).await.expect("add");
        let lines = store.add(&menu_item(2, 2000), 1).await.expect("add");

        assert_eq!(lines[0].id, CartLineId::new(1));
        assert_eq!(lines[1].id, CartLineId::new(2));
    }

    #[tokio::test]
    async fn test_update_quantity_sets_exactly() {
        let store = InMemoryCartStore::new();
        store.add(&menu_item(1, 1000), 2).await.expect("add");

        let found = store
            .update_quantity(MenuItemId::new(1), 7)
            .await
            .expect("update");
        assert!(found);
        let lines = store.lines().await.expect("lines");
        assert_eq!(lines[0].quantity, 7);
    }

    #[tokio::test]
    async fn test_update_quantity_zero_removes_line() {
        let store = InMemoryCartStore::new();
        store.add(&menu_item(1, 1000), 2).await.expect("add");

        let found = store
            .update_quantity(MenuItemId::new(1), 0)
            .await
            .expect("update");
        assert!(found);
        assert!(store.lines().await.expect("lines").is_empty());
    }

    #[tokio::test]
    async fn test_update_quantity_unknown_line_reports_false() {
        let store = InMemoryCartStore::new();
        let found = store
            .update_quantity(MenuItemId::new(9), 1)
            .await
            .expect("update");
        assert!(!found);
    }

    #[tokio::test]
    async fn test_remove_by_line_id() {
        let store = InMemoryCartStore::new();
        store.add(&menu_item(1, 1000), 1).await.expect("add");
        store.add(&menu_item(2, 2000), 1).await.expect("add");

        assert!(store.remove(CartLineId::new(1)).await.expect("remove"));
        assert!(!store.remove(CartLineId::new(1)).await.expect("remove"));

        let lines = store.lines().await.expect("lines");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].menu_id, MenuItemId::new(2));
    }

    #[tokio::test]
    async fn test_remove_by_menu_ids_partitions() {
        let store = InMemoryCartStore::new();
        store.add(&menu_item(1, 1000), 1).await.expect("add");
        store.add(&menu_item(2, 2000), 1).await.expect("add");
        store.add(&menu_item(3, 3000), 1).await.expect("add");

        let removed = store
            .remove_by_menu_ids(&[MenuItemId::new(1), MenuItemId::new(3)])
            .await
            .expect("remove");
        assert_eq!(removed.len(), 2);

        let lines = store.lines().await.expect("lines");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].menu_id, MenuItemId::new(2));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = InMemoryCartStore::new();
        store.add(&menu_item(1, 1000), 1).await.expect("add");

        store.clear().await.expect("clear");
        assert!(store.lines().await.expect("lines").is_empty());
        store.clear().await.expect("clear again");
        assert!(store.lines().await.expect("lines").is_empty());
    }
}
