use crate::store::{condition, key};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// query operation
#[derive(Clone, Debug, Default, PartialEq)]
struct QueryInput {
    expression_attribute_names: Option<collections::HashMap<String, String>>,
    expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    key_condition_expression: String,
    table_name: String,
}

/// Query operation over a single partition.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use orders_api::store::{key, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let query = read::query::Query {
///     partition_key: key::Key::new("order_id", "o-1"),
///     table_name: "order_items".to_string(),
/// };
/// query.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query<T> {
    /// The partition key value to query for.
    pub partition_key: key::Key<T>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<Query<T>> for QueryInput {
    type Error = Error;

    fn try_from(query: Query<T>) -> Result<Self> {
        let partition_key = condition::KeyCondition::new(
            query.partition_key.name,
            condition::Condition::Equals(query.partition_key.value),
        );
        let key_condition_operation =
            condition::KeyCondition::get_expression_operation(vec![partition_key])?;
        let mut expression_attribute_names = None;
        let mut expression_attribute_values = None;
        let key_condition_expression = key_condition_operation.merge_into(
            &mut expression_attribute_names,
            &mut expression_attribute_values,
        );
        let operation = Self {
            expression_attribute_names,
            expression_attribute_values,
            key_condition_expression,
            table_name: query.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> Query<T> {
    /// Execute the query operation, returning the first page only.
    #[tracing::instrument(name = "store.query", level = "debug", skip_all, fields(table = %self.table_name))]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<operation::query::QueryOutput, error::SdkError<operation::query::QueryError>> {
        let query: QueryInput = self.try_into().map_err(error::BuildError::other)?;
        client
            .query()
            .table_name(query.table_name)
            .key_condition_expression(query.key_condition_expression)
            .set_expression_attribute_names(query.expression_attribute_names)
            .set_expression_attribute_values(query.expression_attribute_values)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::items_of_order(
        Query {
            partition_key: key::Key::new("order_id", "o-1"),
            table_name: "order_items".to_string(),
        },
        QueryInput {
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#order_id".to_string(), "order_id".to_string()),
                    ]
                )
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":order_id_eq0".to_string(),
                            types::AttributeValue::S(
                                "o-1".to_string()
                            )
                        ),
                    ]
                )
            ),
            key_condition_expression: "#order_id = :order_id_eq0".to_string(),
            table_name: "order_items".to_string(),
        }
    )]
    #[case::other_partition(
        Query {
            partition_key: key::Key::new("a", "b"),
            table_name: "c".to_string(),
        },
        QueryInput {
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#a".to_string(), "a".to_string()),
                    ]
                )
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":a_eq0".to_string(),
                            types::AttributeValue::S(
                                "b".to_string()
                            )
                        ),
                    ]
                )
            ),
            key_condition_expression: "#a = :a_eq0".to_string(),
            table_name: "c".to_string(),
        }
    )]
    fn test_query(#[case] args: Query<&str>, #[case] expected: QueryInput) {
        let actual: QueryInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
