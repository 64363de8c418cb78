use crate::store::condition;

use aws_sdk_dynamodb::types;
use serde_dynamo::{Error, Result};
use std::collections;

/// Resolved write parameters, ready to be applied to an SDK builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct WriteInput {
    pub(crate) condition_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values:
        Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) table_name: String,
}

/// Arguments common to write operations (Put, Delete).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteArgs {
    /// Conditions that must all hold for the write to succeed.
    ///
    /// When a condition is false the store rejects the write with a
    /// conditional check failure.
    pub condition: Option<Vec<condition::KeyCondition<String>>>,
    /// The name of the table to write to.
    pub table_name: String,
}

impl WriteArgs {
    /// Unconditional write to `table_name`.
    pub fn table(table_name: impl Into<String>) -> Self {
        Self {
            condition: None,
            table_name: table_name.into(),
        }
    }

    /// Write to `table_name` only when no item with the given key attributes exists.
    pub fn if_absent<'a>(
        table_name: impl Into<String>,
        key_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let condition = key_names
            .into_iter()
            .map(|name| condition::KeyCondition::new(name, condition::Condition::NotExists))
            .collect();
        Self {
            condition: Some(condition),
            table_name: table_name.into(),
        }
    }
}

impl TryFrom<WriteArgs> for WriteInput {
    type Error = Error;

    fn try_from(write_args: WriteArgs) -> Result<Self> {
        let mut operation = Self {
            table_name: write_args.table_name,
            ..Default::default()
        };
        if let Some(conditions) = write_args.condition {
            let condition_operation =
                condition::KeyCondition::get_expression_operation(conditions)?;
            let condition_expression = condition_operation.merge_into(
                &mut operation.expression_attribute_names,
                &mut operation.expression_attribute_values,
            );
            operation.condition_expression = Some(condition_expression);
        }
        Ok(operation)
    }
}

/// apply common write operation settings to a builder
macro_rules! apply_write_operation {
    ($builder:expr, $write_operation:expr) => {
        $builder
            .set_condition_expression($write_operation.condition_expression)
            .set_expression_attribute_names($write_operation.expression_attribute_names)
            .set_expression_attribute_values($write_operation.expression_attribute_values)
            .table_name($write_operation.table_name)
    };
}

pub(crate) use apply_write_operation;
