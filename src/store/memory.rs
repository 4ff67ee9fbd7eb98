use crate::framework::Mutator;
use crate::model::{Order, OrderId};
use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Order store backed by a single reader/writer lock.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(&self, id: &OrderId) -> Result<Order, StoreError> {
        self.orders
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    async fn create(&self, order: Order) -> Result<(), StoreError> {
        let id = order.id;
        let mut orders = self.orders.write().await;
        if orders.insert(id, order).is_some() {
            warn!(order_id = %id, "Create replaced an existing order");
        }
        debug!(order_id = %id, size = orders.len(), "Stored order");
        Ok(())
    }

    async fn update(&self, id: &OrderId, mutator: Mutator<Order>) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().await;
        let order = orders.get_mut(id).ok_or(StoreError::NotFound(*id))?;
        mutator(order);
        debug!(order_id = %id, status = %order.status, "Updated order");
        Ok(order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PartId, UserId};

    fn order() -> Order {
        Order::new(
            OrderId::new_v4(),
            UserId("user-1".to_string()),
            vec![PartId::new("part-uuid-1")],
            45000.0,
        )
    }

    #[tokio::test]
    async fn test_create_then_get_returns_snapshot() {
        let store = InMemoryOrderStore::new();
        let order = order();
        store.create(order.clone()).await.unwrap();

        assert_eq!(store.get(&order.id).await.unwrap(), order);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let store = InMemoryOrderStore::new();
        let id = OrderId::new_v4();
        assert_eq!(store.get(&id).await, Err(StoreError::NotFound(id)));
    }

    #[tokio::test]
    async fn test_update_applies_mutator_and_persists() {
        let store = InMemoryOrderStore::new();
        let order = order();
        store.create(order.clone()).await.unwrap();

        let updated = store
            .update(&order.id, Box::new(|o: &mut Order| o.mark_cancelled()))
            .await
            .unwrap();

        assert_eq!(updated.status, crate::model::OrderStatus::Cancelled);
        assert_eq!(store.get(&order.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let store = InMemoryOrderStore::new();
        let id = OrderId::new_v4();
        let result = store
            .update(&id, Box::new(|o: &mut Order| o.mark_cancelled()))
            .await;
        assert_eq!(result, Err(StoreError::NotFound(id)));
        assert!(store.is_empty().await);
    }
}
