use crate::store;

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Result, to_attribute_value};
use std::collections;

/// Condition applied to a single attribute.
///
/// ```rust
/// use orders_api::store::condition;
///
/// let eq = condition::Condition::Equals("o-1".to_string());
/// let absent: condition::Condition<String> = condition::Condition::NotExists;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Condition<T> {
    /// The attribute value equals the given value.
    Equals(T),
    /// The attribute is absent, i.e. no item with this key exists yet.
    NotExists,
}

impl<T: Serialize> Condition<T> {
    fn get_expression(
        self,
        name: &str,
        name_placeholder: &str,
        index: &mut usize,
    ) -> Result<(String, collections::HashMap<String, types::AttributeValue>)> {
        let mut expression_attribute_values = collections::HashMap::new();
        let expression = match self {
            Self::Equals(value) => {
                let value = to_attribute_value(value)?;
                let value_placeholder = format!(":{name}_eq{index}");
                *index += 1;
                let expression = format!("{name_placeholder} = {value_placeholder}");
                expression_attribute_values.insert(value_placeholder, value);
                expression
            }
            Self::NotExists => format!("attribute_not_exists({name_placeholder})"),
        };
        Ok((expression, expression_attribute_values))
    }
}

/// Condition bound to an attribute name.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyCondition<T> {
    /// The condition to apply to the attribute.
    pub condition: Condition<T>,
    /// The name of the attribute to apply the condition to.
    pub name: String,
}

impl<T> KeyCondition<T> {
    /// Bind `condition` to the attribute `name`.
    pub fn new(name: impl Into<String>, condition: Condition<T>) -> Self {
        Self {
            condition,
            name: name.into(),
        }
    }
}

impl<T: Serialize> KeyCondition<T> {
    /// Render all conditions joined with `AND`.
    pub(crate) fn get_expression_operation(conditions: Vec<Self>) -> Result<store::ExpressionInput> {
        let mut expressions = Vec::with_capacity(conditions.len());
        let mut expression_attribute_names = collections::HashMap::with_capacity(conditions.len());
        let mut expression_attribute_values = collections::HashMap::new();
        let mut index = 0;
        for condition in conditions {
            let placeholder = format!("#{}", condition.name);
            let (expression, values) =
                condition
                    .condition
                    .get_expression(&condition.name, &placeholder, &mut index)?;
            expressions.push(expression);
            expression_attribute_names.insert(placeholder, condition.name);
            expression_attribute_values.extend(values);
        }
        let operation = store::ExpressionInput {
            expression: expressions.join(" AND "),
            expression_attribute_names,
            expression_attribute_values,
        };
        Ok(operation)
    }
}
