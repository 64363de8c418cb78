use crate::{
    models::{Order, OrderItem},
    repository::{ID, ORDER_ID, Repository, RepositoryError, cascade},
    store::{
        key::{Key, Keys},
        read::{get_item::GetItem, query::Query, scan::Scan},
        write::{common::WriteArgs, delete_item::DeleteItem, put_item::PutItem},
    },
};

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, from_items};
use tracing::instrument;

/// Repository over two DynamoDB tables: orders keyed by `id`, order items keyed
/// by `(order_id, id)`.
#[derive(Clone, Debug)]
pub struct DynamoRepository {
    client: Client,
    orders_table: String,
    order_items_table: String,
}

impl DynamoRepository {
    /// Wrap a client; the tables must already exist.
    pub fn new(
        client: Client,
        orders_table: impl Into<String>,
        order_items_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            orders_table: orders_table.into(),
            order_items_table: order_items_table.into(),
        }
    }

    fn order_key(id: &str) -> Keys<&str> {
        Keys::partition(ID, id)
    }

    fn order_item_key<'a>(order_id: &'a str, id: &'a str) -> Keys<&'a str> {
        Keys::partition(ORDER_ID, order_id).with_sort(ID, id)
    }
}

#[async_trait]
impl Repository for DynamoRepository {
    #[instrument(skip_all, fields(table = %self.orders_table, id = %order.id), err)]
    async fn create_order(&self, order: &Order) -> Result<(), RepositoryError> {
        PutItem {
            item: order,
            write_args: WriteArgs::if_absent(&self.orders_table, [ID]),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.orders_table), err)]
    async fn get_order(&self, id: &str) -> Result<Option<Order>, RepositoryError> {
        let output = GetItem {
            keys: Self::order_key(id),
            table_name: self.orders_table.clone(),
        }
        .send(&self.client)
        .await?;
        match output.item {
            Some(item) => Ok(Some(from_item(item)?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self), fields(table = %self.orders_table), err)]
    async fn list_orders(&self) -> Result<Vec<Order>, RepositoryError> {
        let output = Scan {
            table_name: self.orders_table.clone(),
        }
        .send(&self.client)
        .await?;
        Ok(from_items(output.items.unwrap_or_default())?)
    }

    #[instrument(skip_all, fields(table = %self.orders_table, id = %order.id), err)]
    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError> {
        PutItem {
            item: order,
            write_args: WriteArgs::table(&self.orders_table),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.orders_table), err)]
    async fn delete_order(&self, id: &str) -> Result<(), RepositoryError> {
        cascade::delete_order(self, id, || async {
            DeleteItem {
                keys: Self::order_key(id),
                write_args: WriteArgs::table(&self.orders_table),
            }
            .send(&self.client)
            .await?;
            Ok::<_, RepositoryError>(())
        })
        .await
    }

    #[instrument(
        skip_all,
        fields(table = %self.order_items_table, order_id = %item.order_id, id = %item.id),
        err
    )]
    async fn create_order_item(&self, item: &OrderItem) -> Result<(), RepositoryError> {
        PutItem {
            item,
            write_args: WriteArgs::if_absent(&self.order_items_table, [ORDER_ID, ID]),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.order_items_table), err)]
    async fn get_order_item(
        &self,
        order_id: &str,
        id: &str,
    ) -> Result<Option<OrderItem>, RepositoryError> {
        let output = GetItem {
            keys: Self::order_item_key(order_id, id),
            table_name: self.order_items_table.clone(),
        }
        .send(&self.client)
        .await?;
        match output.item {
            Some(item) => Ok(Some(from_item(item)?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self), fields(table = %self.order_items_table), err)]
    async fn list_order_items(&self, order_id: &str) -> Result<Vec<OrderItem>, RepositoryError> {
        let output = Query {
            partition_key: Key::new(ORDER_ID, order_id),
            table_name: self.order_items_table.clone(),
        }
        .send(&self.client)
        .await?;
        Ok(from_items(output.items.unwrap_or_default())?)
    }

    #[instrument(
        skip_all,
        fields(table = %self.order_items_table, order_id = %item.order_id, id = %item.id),
        err
    )]
    async fn update_order_item(&self, item: &OrderItem) -> Result<(), RepositoryError> {
        PutItem {
            item,
            write_args: WriteArgs::table(&self.order_items_table),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.order_items_table), err)]
    async fn delete_order_item(&self, order_id: &str, id: &str) -> Result<(), RepositoryError> {
        DeleteItem {
            keys: Self::order_item_key(order_id, id),
            write_args: WriteArgs::table(&self.order_items_table),
        }
        .send(&self.client)
        .await?;
        Ok(())
    }
}
