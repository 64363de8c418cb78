use crate::{
    models::{Order, OrderItem},
    repository::{Repository, RepositoryError, cascade},
};

use async_trait::async_trait;
use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};
use tokio::sync::RwLock;

type ItemKey = (String, String);

/// Repository kept in process memory.
///
/// Behaves like [`DynamoRepository`](super::DynamoRepository) for every
/// operation: conditional creates, idempotent deletes, per-order item listing
/// and the bounded cascade. Clones share the same data.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    orders: Arc<RwLock<HashMap<String, Order>>>,
    order_items: Arc<RwLock<BTreeMap<ItemKey, OrderItem>>>,
}

impl InMemoryRepository {
    /// An empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    async fn remove_order(&self, id: &str) -> Result<(), RepositoryError> {
        self.orders.write().await.remove(id);
        Ok(())
    }
}

fn conditional_check_failed() -> RepositoryError {
    RepositoryError::Store("conditional check failed: record already exists".to_string())
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn create_order(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(conditional_check_failed());
        }
        orders.insert(order.id.clone(), order.clone());
        Ok(())
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders.read().await.get(id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError> {
        self.orders
            .write()
            .await
            .insert(order.id.clone(), order.clone());
        Ok(())
    }

    async fn delete_order(&self, id: &str) -> Result<(), RepositoryError> {
        cascade::delete_order(self, id, || self.remove_order(id)).await
    }

    async fn create_order_item(&self, item: &OrderItem) -> Result<(), RepositoryError> {
        let key = (item.order_id.clone(), item.id.clone());
        let mut order_items = self.order_items.write().await;
        if order_items.contains_key(&key) {
            return Err(conditional_check_failed());
        }
        order_items.insert(key, item.clone());
        Ok(())
    }

    async fn get_order_item(
        &self,
        order_id: &str,
        id: &str,
    ) -> Result<Option<OrderItem>, RepositoryError> {
        let key = (order_id.to_string(), id.to_string());
        Ok(self.order_items.read().await.get(&key).cloned())
    }

    async fn list_order_items(&self, order_id: &str) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = self
            .order_items
            .read()
            .await
            .values()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect();
        Ok(items)
    }

    async fn update_order_item(&self, item: &OrderItem) -> Result<(), RepositoryError> {
        let key = (item.order_id.clone(), item.id.clone());
        self.order_items.write().await.insert(key, item.clone());
        Ok(())
    }

    async fn delete_order_item(&self, order_id: &str, id: &str) -> Result<(), RepositoryError> {
        let key = (order_id.to_string(), id.to_string());
        self.order_items.write().await.remove(&key);
        Ok(())
    }
}

/// Wrapper whose deletion of one chosen item always fails.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct FailingItemDeletion {
    inner: InMemoryRepository,
    item_id: String,
}

#[cfg(test)]
impl FailingItemDeletion {
    pub(crate) fn new(inner: InMemoryRepository, item_id: impl Into<String>) -> Self {
        Self {
            inner,
            item_id: item_id.into(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Repository for FailingItemDeletion {
    async fn create_order(&self, order: &Order) -> Result<(), RepositoryError> {
        self.inner.create_order(order).await
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, RepositoryError> {
        self.inner.get_order(id).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        self.inner.list_orders().await
    }

    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError> {
        self.inner.update_order(order).await
    }

    async fn delete_order(&self, id: &str) -> Result<(), RepositoryError> {
        cascade::delete_order(self, id, || self.inner.remove_order(id)).await
    }

    async fn create_order_item(&self, item: &OrderItem) -> Result<(), RepositoryError> {
        self.inner.create_order_item(item).await
    }

    async fn get_order_item(
        &self,
        order_id: &str,
        id: &str,
    ) -> Result<Option<OrderItem>, RepositoryError> {
        self.inner.get_order_item(order_id, id).await
    }

    async fn list_order_items(&self, order_id: &str) -> Result<Vec<OrderItem>, RepositoryError> {
        self.inner.list_order_items(order_id).await
    }

    async fn update_order_item(&self, item: &OrderItem) -> Result<(), RepositoryError> {
        self.inner.update_order_item(item).await
    }

    async fn delete_order_item(&self, order_id: &str, id: &str) -> Result<(), RepositoryError> {
        if id == self.item_id {
            return Err(RepositoryError::Store(format!("failed to delete item {id}")));
        }
        self.inner.delete_order_item(order_id, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn order(id: &str) -> Order {
        let mut order = Order::new("Alice".to_string(), "new".to_string());
        order.id = id.to_string();
        order
    }

    fn item(order_id: &str, id: &str) -> OrderItem {
        let mut item = OrderItem::new(order_id.to_string(), "Keyboard".to_string(), 1, 10.0);
        item.id = id.to_string();
        item
    }

    async fn seeded(order_id: &str, items: usize) -> InMemoryRepository {
        let repository = InMemoryRepository::new();
        repository.create_order(&order(order_id)).await.unwrap();
        for index in 0..items {
            repository
                .create_order_item(&item(order_id, &format!("i-{index}")))
                .await
                .unwrap();
        }
        repository
    }

    #[tokio::test]
    async fn test_create_is_conditional() {
        let repository = seeded("o-1", 1).await;
        assert!(matches!(
            repository.create_order(&order("o-1")).await,
            Err(RepositoryError::Store(_))
        ));
        assert!(matches!(
            repository.create_order_item(&item("o-1", "i-0")).await,
            Err(RepositoryError::Store(_))
        ));
    }

    #[tokio::test]
    async fn test_items_are_scoped_to_their_order() {
        let repository = seeded("o-1", 2).await;
        repository.create_order(&order("o-2")).await.unwrap();
        repository
            .create_order_item(&item("o-2", "i-0"))
            .await
            .unwrap();
        assert_eq!(repository.list_order_items("o-1").await.unwrap().len(), 2);
        assert_eq!(repository.list_order_items("o-2").await.unwrap().len(), 1);
        assert_eq!(
            repository.get_order_item("o-2", "i-1").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_deletes_are_idempotent() {
        let repository = InMemoryRepository::new();
        repository.delete_order("missing").await.unwrap();
        repository.delete_order_item("missing", "i-0").await.unwrap();
    }

    #[rstest]
    #[case::no_items(0)]
    #[case::one_item(1)]
    #[case::many_items(25)]
    #[tokio::test]
    async fn test_delete_order_cascades(#[case] items: usize) {
        let repository = seeded("o-1", items).await;
        repository.create_order(&order("o-2")).await.unwrap();
        repository
            .create_order_item(&item("o-2", "i-0"))
            .await
            .unwrap();

        repository.delete_order("o-1").await.unwrap();

        assert_eq!(repository.get_order("o-1").await.unwrap(), None);
        assert!(repository.list_order_items("o-1").await.unwrap().is_empty());
        assert!(repository.get_order("o-2").await.unwrap().is_some());
        assert_eq!(repository.list_order_items("o-2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_cascade_keeps_order() {
        let repository = seeded("o-1", 10).await;
        let failing = FailingItemDeletion::new(repository.clone(), "i-4");

        let result = failing.delete_order("o-1").await;

        assert!(matches!(result, Err(RepositoryError::Store(_))));
        assert!(repository.get_order("o-1").await.unwrap().is_some());
        let remaining = repository.list_order_items("o-1").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "i-4");
    }
}
