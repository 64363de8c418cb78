//! Typed DynamoDB operations.
//!
//! Every operation is a plain value (`GetItem`, `Query`, `PutItem`, ...) that is
//! converted into an internal input holding the resolved expression strings and
//! attribute maps, then applied to the SDK fluent builder by `send`.

/// Client construction for the document store.
pub mod client;

/// Condition expressions for key conditions and conditional writes.
pub mod condition;

/// Key types for identifying items in a table.
pub mod key;

/// Read operations (GetItem, Query, Scan).
pub mod read;

/// Write operations (PutItem, DeleteItem).
pub mod write;

use aws_sdk_dynamodb::types;
use std::collections;

/// expression with its placeholder maps
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    /// Move the placeholder maps into the given optional maps, returning the expression.
    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> String {
        match names {
            Some(existing) => existing.extend(self.expression_attribute_names),
            None => *names = Some(self.expression_attribute_names),
        }
        // attribute_not_exists() carries no values and DynamoDB rejects an empty map
        if !self.expression_attribute_values.is_empty() {
            match values {
                Some(existing) => existing.extend(self.expression_attribute_values),
                None => *values = Some(self.expression_attribute_values),
            }
        }
        self.expression
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_into_skips_empty_values() {
        let input = ExpressionInput {
            expression: "attribute_not_exists(#id)".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#id".to_string(),
                "id".to_string(),
            )]),
            ..Default::default()
        };
        let mut names = None;
        let mut values = None;
        let expression = input.merge_into(&mut names, &mut values);
        assert_eq!(expression, "attribute_not_exists(#id)");
        assert_eq!(
            names,
            Some(collections::HashMap::from([(
                "#id".to_string(),
                "id".to_string()
            )]))
        );
        assert_eq!(values, None);
    }

    #[test]
    fn test_merge_into_extends_existing() {
        let input = ExpressionInput {
            expression: "#b = :b_eq0".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#b".to_string(),
                "b".to_string(),
            )]),
            expression_attribute_values: collections::HashMap::from([(
                ":b_eq0".to_string(),
                types::AttributeValue::S("c".to_string()),
            )]),
        };
        let mut names = Some(collections::HashMap::from([(
            "#a".to_string(),
            "a".to_string(),
        )]));
        let mut values = Some(collections::HashMap::new());
        input.merge_into(&mut names, &mut values);
        assert_eq!(names.map(|names| names.len()), Some(2));
        assert_eq!(values.map(|values| values.len()), Some(1));
    }
}
