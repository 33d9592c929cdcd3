//! Order ledger store.
//!
//! The ledger is append-only: orders are prepended (newest first) and
//! never deleted. Ids are millisecond timestamps forced monotonic, so
//! two orders created within the same millisecond still get distinct,
//! increasing ids.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use saffron_core::{OrderId, OrderStatus};

use super::RepositoryError;
use crate::models::{Order, OrderLine};

/// Access to the order ledger.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Append a new `pending` order built from the given line snapshots.
    /// The store assigns the id and creation timestamp.
    async fn insert(
        &self,
        items: Vec<OrderLine>,
        total: Decimal,
    ) -> Result<Order, RepositoryError>;

    /// Look up an order by id.
    async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Full ledger snapshot, newest first.
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Overwrite an order's status. Returns the updated order, or `None`
    /// if the id is unknown. Transition rules are the caller's concern.
    async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError>;
}

#[derive(Default)]
struct LedgerState {
    orders: Vec<Order>,
    last_id: i64,
}

/// In-memory order ledger.
#[derive(Default)]
pub struct InMemoryOrderStore {
    state: RwLock<LedgerState>,
}

impl InMemoryOrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(
        &self,
        items: Vec<OrderLine>,
        total: Decimal,
    ) -> Result<Order, RepositoryError> {
        let mut state = self.state.write()?;

        let now = Utc::now();
        // Timestamp ids collide when two orders land in the same
        // millisecond; bump past the last issued id to keep them unique.
        let id = now.timestamp_millis().max(state.last_id + 1);
        state.last_id = id;

        let order = Order {
            id: OrderId::new(id),
            items,
            status: OrderStatus::Pending,
            created_at: now,
            total,
        };

        state.orders.insert(0, order.clone());
        Ok(order)
    }

    async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let state = self.state.read()?;
        Ok(state.orders.iter().find(|order| order.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let state = self.state.read()?;
        Ok(state.orders.clone())
    }

    async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut state = self.state.write()?;
        match state.orders.iter_mut().find(|order| order.id == id) {
            Some(order) => {
                order.status = status;
                Ok(Some(order.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saffron_core::MenuItemId;

    fn lines() -> Vec<OrderLine> {
        vec![OrderLine {
            menu_item_id: MenuItemId::new(2),
            quantity: 1,
            price: Decimal::new(1000, 2),
            total: Decimal::new(1000, 2),
        }]
    }

    #[tokio::test]
    async fn test_insert_is_pending_and_newest_first() {
        let store = InMemoryOrderStore::new();
        let first = store
            .insert(lines(), Decimal::new(1000, 2))
            .await
            .expect("insert");
        let second = store
            .insert(lines(), Decimal::new(1000, 2))
            .await
            .expect("insert");

        assert_eq!(first.status, OrderStatus::Pending);
        let all = store.list().await.expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn test_ids_are_strictly_increasing() {
        let store = InMemoryOrderStore::new();
        let mut last = 0;
        for _ in 0..5 {
            let order = store
                .insert(lines(), Decimal::new(1000, 2))
                .await
                .expect("insert");
            assert!(order.id.as_i64() > last);
            last = order.id.as_i64();
        }
    }

    #[tokio::test]
    async fn test_set_status_overwrites() {
        let store = InMemoryOrderStore::new();
        let order = store
            .insert(lines(), Decimal::new(1000, 2))
            .await
            .expect("insert");

        let updated = store
            .set_status(order.id, OrderStatus::Completed)
            .await
            .expect("set")
            .expect("present");
        assert_eq!(updated.status, OrderStatus::Completed);

        assert!(store
            .set_status(OrderId::new(1), OrderStatus::Completed)
            .await
            .expect("set")
            .is_none());
    }
}
