//! Order lifecycle service.
//!
//! Orders snapshot their line prices at creation and are never
//! recomputed, so later menu price changes do not affect placed orders.
//! Status changes go through the transition table on
//! [`OrderStatus`]; there is no payment or inventory rollback to model.

use rust_decimal::Decimal;
use thiserror::Error;

use saffron_core::{MenuItemId, OrderId, OrderStatus};

use crate::models::{Order, OrderLine, OrderLineInput};
use crate::store::{CartStore, OrderStore, RepositoryError};

/// Errors from order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An order needs at least one line.
    #[error("order must contain at least one item")]
    Empty,

    /// A line failed validation (zero quantity or negative price).
    #[error("invalid order line: {0}")]
    InvalidLine(String),

    /// No order with the given id.
    #[error("order {0} not found")]
    NotFound(OrderId),

    /// The requested status change is not allowed.
    #[error("cannot change order status from {from} to {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Order placement and lifecycle over the shared ledger.
pub struct OrderService<'a> {
    orders: &'a dyn OrderStore,
    cart: &'a dyn CartStore,
}

impl<'a> OrderService<'a> {
    #[must_use]
    pub const fn new(orders: &'a dyn OrderStore, cart: &'a dyn CartStore) -> Self {
        Self { orders, cart }
    }

    /// Place an order from explicit line inputs.
    ///
    /// Computes each line's total and the order total, assigns a fresh
    /// id and `pending` status, and appends to the ledger (newest
    /// first).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Empty` for an empty input and
    /// `OrderError::InvalidLine` for a zero quantity or negative price.
    pub async fn place(&self, items: Vec<OrderLineInput>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::Empty);
        }

        let mut lines = Vec::with_capacity(items.len());
        for input in items {
            if input.quantity == 0 {
                return Err(OrderError::InvalidLine(format!(
                    "menu item {}: quantity must be at least 1",
                    input.menu_item_id
                )));
            }
            if input.price < Decimal::ZERO {
                return Err(OrderError::InvalidLine(format!(
                    "menu item {}: price must not be negative",
                    input.menu_item_id
                )));
            }
            let total = input.price * Decimal::from(input.quantity);
            lines.push(OrderLine {
                menu_item_id: input.menu_item_id,
                quantity: input.quantity,
                price: input.price,
                total,
            });
        }

        let total: Decimal = lines.iter().map(|line| line.total).sum();
        Ok(self.orders.insert(lines, total).await?)
    }

    /// Check out the selected cart lines: place an order from them and
    /// prune exactly those lines from the cart.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Empty` if no cart line matches the
    /// selection.
    pub async fn checkout(&self, menu_ids: &[MenuItemId]) -> Result<Order, OrderError> {
        let lines = self.cart.lines().await.map_err(OrderError::Repository)?;
        let selected: Vec<OrderLineInput> = lines
            .iter()
            .filter(|line| menu_ids.contains(&line.menu_id))
            .map(|line| OrderLineInput {
                menu_item_id: line.menu_id,
                quantity: line.quantity,
                price: line.price,
            })
            .collect();

        let order = self.place(selected).await?;
        self.cart
            .remove_by_menu_ids(menu_ids)
            .await
            .map_err(OrderError::Repository)?;
        Ok(order)
    }

    /// Full ledger snapshot, newest first.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the store fails.
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.list().await?)
    }

    /// Look up an order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` if the id is unknown.
    pub async fn get(&self, id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .get(id)
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    /// Cancel an order. Allowed only while the order is still open
    /// (`pending` or `processing`); cancelling an already-cancelled
    /// order is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::InvalidTransition` for completed orders.
    pub async fn cancel(&self, id: OrderId) -> Result<Order, OrderError> {
        self.update_status(id, OrderStatus::Cancelled).await
    }

    /// Change an order's status, guarded by the transition table.
    /// Writing the current status again is a no-op overwrite.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` for an unknown id and
    /// `OrderError::InvalidTransition` for a disallowed change.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let order = self.get(id).await?;

        if !order.status.can_transition_to(status) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: status,
            });
        }

        self.orders
            .set_status(id, status)
            .await?
            .ok_or(OrderError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cart::CartService;
    use crate::store::{InMemoryCartStore, InMemoryMenuStore, InMemoryOrderStore};

    fn line(menu_id: i32, quantity: u32, cents: i64) -> OrderLineInput {
        OrderLineInput {
            menu_item_id: MenuItemId::new(menu_id),
            quantity,
            price: Decimal::new(cents, 2),
        }
    }

    #[tokio::test]
    async fn test_place_computes_totals() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCartStore::new();
        let service = OrderService::new(&orders, &cart);

        let order = service
            .place(vec![line(2, 1, 1000), line(3, 3, 250)])
            .await
            .expect("place");

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items[0].total, Decimal::new(1000, 2));
        assert_eq!(order.items[1].total, Decimal::new(750, 2));
        assert_eq!(order.total, Decimal::new(1750, 2));

        // total == sum(price * quantity) over all lines
        let recomputed: Decimal = order
            .items
            .iter()
            .map(|l| l.price * Decimal::from(l.quantity))
            .sum();
        assert_eq!(order.total, recomputed);
    }

    #[tokio::test]
    async fn test_place_single_line_scenario() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCartStore::new();
        let service = OrderService::new(&orders, &cart);

        let order = service.place(vec![line(2, 1, 1000)]).await.expect("place");
        assert_eq!(order.total, Decimal::new(1000, 2));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_place_rejects_empty_and_invalid_lines() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCartStore::new();
        let service = OrderService::new(&orders, &cart);

        assert!(matches!(service.place(vec![]).await, Err(OrderError::Empty)));
        assert!(matches!(
            service.place(vec![line(1, 0, 1000)]).await,
            Err(OrderError::InvalidLine(_))
        ));
        assert!(matches!(
            service.place(vec![line(1, 1, -5)]).await,
            Err(OrderError::InvalidLine(_))
        ));
    }

    #[tokio::test]
    async fn test_update_status_pending_to_completed_then_noop() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCartStore::new();
        let service = OrderService::new(&orders, &cart);

        let order = service.place(vec![line(1, 1, 500)]).await.expect("place");

        let completed = service
            .update_status(order.id, OrderStatus::Completed)
            .await
            .expect("complete");
        assert_eq!(completed.status, OrderStatus::Completed);

        // Repeating the call is a no-op overwrite with the same value
        let again = service
            .update_status(order.id, OrderStatus::Completed)
            .await
            .expect("repeat");
        assert_eq!(again.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_update_status_rejects_backward_transition() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCartStore::new();
        let service = OrderService::new(&orders, &cart);

        let order = service.place(vec![line(1, 1, 500)]).await.expect("place");
        service
            .update_status(order.id, OrderStatus::Completed)
            .await
            .expect("complete");

        let result = service
            .update_status(order.id, OrderStatus::Pending)
            .await;
        assert!(matches!(
            result,
            Err(OrderError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_pending_but_not_completed() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCartStore::new();
        let service = OrderService::new(&orders, &cart);

        let order = service.place(vec![line(1, 1, 500)]).await.expect("place");
        let cancelled = service.cancel(order.id).await.expect("cancel");
        assert_eq!(cancelled.status, OrderStatus::Cancelled);

        let other = service.place(vec![line(1, 1, 500)]).await.expect("place");
        service
            .update_status(other.id, OrderStatus::Completed)
            .await
            .expect("complete");
        assert!(matches!(
            service.cancel(other.id).await,
            Err(OrderError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_order_is_not_found() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCartStore::new();
        let service = OrderService::new(&orders, &cart);

        let result = service
            .update_status(OrderId::new(42), OrderStatus::Completed)
            .await;
        assert!(matches!(result, Err(OrderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_checkout_places_order_and_prunes_selected_lines() {
        let menu = InMemoryMenuStore::seeded();
        let cart = InMemoryCartStore::new();
        let orders = InMemoryOrderStore::new();

        let cart_service = CartService::new(&menu, &cart);
        cart_service.add(MenuItemId::new(1), 2).await.expect("add");
        cart_service.add(MenuItemId::new(2), 1).await.expect("add");

        let order_service = OrderService::new(&orders, &cart);
        let order = order_service
            .checkout(&[MenuItemId::new(1)])
            .await
            .expect("checkout");

        // Order carries the cart snapshot for the selected line
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].menu_item_id, MenuItemId::new(1));
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total, Decimal::new(2599, 2) * Decimal::from(2u32));

        // The purchased line is pruned, the other remains
        let remaining = cart_service.list().await.expect("list");
        assert_eq!(remaining.items.len(), 1);
        assert_eq!(remaining.items[0].menu_id, MenuItemId::new(2));
    }

    #[tokio::test]
    async fn test_checkout_with_no_matching_lines_is_empty() {
        let cart = InMemoryCartStore::new();
        let orders = InMemoryOrderStore::new();
        let service = OrderService::new(&orders, &cart);

        let result = service.checkout(&[MenuItemId::new(1)]).await;
        assert!(matches!(result, Err(OrderError::Empty)));
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCartStore::new();
        let service = OrderService::new(&orders, &cart);

        let first = service.place(vec![line(1, 1, 500)]).await.expect("place");
        let second = service.place(vec![line(2, 1, 500)]).await.expect("place");

        let all = service.list().await.expect("list");
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }
}
