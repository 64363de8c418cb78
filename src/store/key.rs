use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Key component.
///
/// ```rust
/// use orders_api::store::key;
///
/// let key = key::Key::new("id", "1");
/// assert_eq!(key.name, "id");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

impl<T> Key<T> {
    /// Create a key component.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Primary key (partition key and optional sort key).
///
/// ```rust
/// use orders_api::store::key;
///
/// let keys = key::Keys::partition("order_id", "o-1").with_sort("id", "i-1");
/// assert!(keys.sort_key.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keys<T> {
    /// The partition key (required).
    pub partition_key: Key<T>,
    /// The sort key (only for tables with composite primary keys).
    pub sort_key: Option<Key<T>>,
}

impl<T> Keys<T> {
    /// Primary key made of a partition key only.
    pub fn partition(name: impl Into<String>, value: T) -> Self {
        Self {
            partition_key: Key::new(name, value),
            sort_key: None,
        }
    }

    /// Add a sort key, turning this into a composite key.
    pub fn with_sort(mut self, name: impl Into<String>, value: T) -> Self {
        self.sort_key = Some(Key::new(name, value));
        self
    }
}

impl<T: Serialize> TryFrom<Keys<T>> for collections::HashMap<String, types::AttributeValue> {
    type Error = Error;

    fn try_from(keys: Keys<T>) -> Result<Self> {
        let partition_key_value = to_attribute_value(keys.partition_key.value)?;
        let mut map = Self::from([(keys.partition_key.name, partition_key_value)]);
        if let Some(sort_key) = keys.sort_key {
            let sort_key_value = to_attribute_value(sort_key.value)?;
            map.insert(sort_key.name, sort_key_value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::order(
        Keys::partition("id", "o-1"),
        collections::HashMap::from(
            [(
                "id".to_string(),
                types::AttributeValue::S(
                    "o-1".to_string()
                ),
            )]
        )
    )]
    #[case::order_item(
        Keys::partition("order_id", "o-1").with_sort("id", "i-9"),
        collections::HashMap::from(
            [
                (
                    "order_id".to_string(),
                    types::AttributeValue::S(
                        "o-1".to_string()
                    )
                ),
                (
                    "id".to_string(),
                    types::AttributeValue::S(
                        "i-9".to_string()
                    )
                ),
            ]
        )
    )]
    fn test_keys_to_hash_map(
        #[case] keys: Keys<&str>,
        #[case] expected: collections::HashMap<String, types::AttributeValue>,
    ) {
        let actual: collections::HashMap<String, types::AttributeValue> = keys.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
