//! Data access for orders and order items.
//!
//! [`Repository`] is the only boundary between the HTTP layer and the store.
//! Lookups return `Ok(None)` for absent records, so a missing record and a
//! failed lookup are always distinguishable. Store errors are passed upward
//! unchanged: there are no retries at this layer.

/// Bounded fan-out used by the cascading order delete.
pub mod cascade;

/// Repository backed by DynamoDB tables.
pub mod dynamo;

/// Repository backed by process memory.
pub mod memory;

pub use dynamo::DynamoRepository;
pub use memory::InMemoryRepository;

use crate::models::{Order, OrderItem};

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use std::{error, fmt};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Attribute name of an order's key and of an order item's sort key.
pub const ID: &str = "id";

/// Attribute name of an order item's partition key.
pub const ORDER_ID: &str = "order_id";

/// Errors surfaced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected or failed the request; carries the store's full message.
    #[error("{0}")]
    Store(String),

    /// A record could not be converted to or from the store representation.
    #[error("failed to convert record: {0}")]
    Serialization(#[from] serde_dynamo::Error),
}

impl<E, R> From<SdkError<E, R>> for RepositoryError
where
    E: error::Error + Send + Sync + 'static,
    R: fmt::Debug + Send + Sync + 'static,
{
    fn from(error: SdkError<E, R>) -> Self {
        Self::Store(DisplayErrorContext(&error).to_string())
    }
}

/// CRUD over orders and their items.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Repository: Send + Sync {
    /// Store a new order; fails if an order with the same id exists.
    async fn create_order(&self, order: &Order) -> Result<(), RepositoryError>;

    /// Fetch an order, `None` if absent.
    async fn get_order(&self, id: &str) -> Result<Option<Order>, RepositoryError>;

    /// All orders (single page).
    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Overwrite an order unconditionally.
    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError>;

    /// Delete an order's items, then the order itself.
    ///
    /// Items are deleted concurrently, at most
    /// [`CASCADE_CONCURRENCY`](cascade::CASCADE_CONCURRENCY) at a time. If any
    /// item deletion fails the order record is left in place and the first
    /// failure is returned, so the call can be retried. Deleting an absent
    /// order succeeds.
    async fn delete_order(&self, id: &str) -> Result<(), RepositoryError>;

    /// Store a new item; fails if an item with the same `(order_id, id)` exists.
    async fn create_order_item(&self, item: &OrderItem) -> Result<(), RepositoryError>;

    /// Fetch an item, `None` if absent.
    async fn get_order_item(
        &self,
        order_id: &str,
        id: &str,
    ) -> Result<Option<OrderItem>, RepositoryError>;

    /// Items of one order (single page).
    async fn list_order_items(&self, order_id: &str) -> Result<Vec<OrderItem>, RepositoryError>;

    /// Overwrite an item unconditionally.
    async fn update_order_item(&self, item: &OrderItem) -> Result<(), RepositoryError>;

    /// Delete an item; deleting an absent item succeeds.
    async fn delete_order_item(&self, order_id: &str, id: &str) -> Result<(), RepositoryError>;
}
