use crate::store::write;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_item};
use std::collections;

/// put item operation
#[derive(Debug, PartialEq)]
struct PutItemInput {
    item: collections::HashMap<String, types::AttributeValue>,
    write_operation: write::common::WriteInput,
}

/// Put item operation.
///
/// Writes the whole item, replacing any existing item with the same key unless
/// the write arguments carry a condition.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use orders_api::store::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: json!({"id": "o-1", "customer_name": "Alice"}),
///     write_args: write::common::WriteArgs::if_absent("orders", ["id"]),
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct PutItem<T> {
    /// The item to put into the table.
    pub item: T,
    /// Table name and optional condition.
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<PutItem<T>> for PutItemInput {
    type Error = Error;

    fn try_from(put_item: PutItem<T>) -> Result<Self> {
        let item = to_item(put_item.item)?;
        let write_operation: write::common::WriteInput = put_item.write_args.try_into()?;
        let operation = Self {
            item,
            write_operation,
        };
        Ok(operation)
    }
}

impl<T: Serialize> PutItem<T> {
    /// Execute the put item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        let put_item: PutItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client.put_item().set_item(Some(put_item.item));
        write::common::apply_write_operation!(builder, put_item.write_operation)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::replace(
        PutItem {
            item: json!(
                {
                    "id": "o-1",
                    "status": "shipped"
                }
            ),
            write_args: write::common::WriteArgs::table("orders"),
        },
        PutItemInput {
            item: collections::HashMap::from(
                [
                    (
                        "id".to_string(),
                        types::AttributeValue::S(
                            "o-1".to_string()
                        ),
                    ),
                    (
                        "status".to_string(),
                        types::AttributeValue::S(
                            "shipped".to_string()
                        ),
                    ),
                ]
            ),
            write_operation: write::common::WriteInput {
                table_name: "orders".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::create(
        PutItem {
            item: json!(
                {
                    "order_id": "o-1",
                    "id": "i-1",
                    "quantity": 2
                }
            ),
            write_args: write::common::WriteArgs::if_absent("order_items", ["order_id", "id"]),
        },
        PutItemInput {
            item: collections::HashMap::from(
                [
                    (
                        "order_id".to_string(),
                        types::AttributeValue::S(
                            "o-1".to_string()
                        ),
                    ),
                    (
                        "id".to_string(),
                        types::AttributeValue::S(
                            "i-1".to_string()
                        ),
                    ),
                    (
                        "quantity".to_string(),
                        types::AttributeValue::N(
                            "2".to_string()
                        ),
                    ),
                ]
            ),
            write_operation: write::common::WriteInput {
                condition_expression: Some(
                    "attribute_not_exists(#order_id) AND attribute_not_exists(#id)".to_string()
                ),
                expression_attribute_names: Some(
                    collections::HashMap::from(
                        [
                            ("#order_id".to_string(), "order_id".to_string()),
                            ("#id".to_string(), "id".to_string()),
                        ]
                    )
                ),
                table_name: "order_items".to_string(),
                ..Default::default()
            },
        }
    )]
    fn test_put_item(#[case] args: PutItem<Value>, #[case] expected: PutItemInput) {
        let actual: PutItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
