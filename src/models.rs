//! Orders and order items.
//!
//! Both records serialize identically to JSON responses and to DynamoDB items:
//! orders are keyed by `id`, order items by `(order_id, id)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Status given to orders created without one.
pub const DEFAULT_STATUS: &str = "new";

/// A customer order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Server-generated identifier, immutable.
    pub id: String,
    /// Name of the ordering customer, never empty.
    pub customer_name: String,
    /// Free-form status, `"new"` unless given.
    pub status: String,
    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Time of the last successful mutation.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// A fresh order with a generated id and equal creation/update times.
    pub fn new(customer_name: String, status: String) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::new_v4().to_string(),
            customer_name,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = timestamp::advance(self.updated_at);
    }
}

/// A line of an [`Order`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    /// Identifier of the owning order.
    pub order_id: String,
    /// Server-generated identifier, unique within the order.
    pub id: String,
    /// Name of the product, never empty.
    pub product_name: String,
    /// Number of units, at least 1.
    pub quantity: i64,
    /// Unit price, never negative.
    pub price: f64,
    /// Creation time.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Time of the last successful mutation.
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    /// A fresh item of `order_id` with a generated id.
    pub fn new(order_id: String, product_name: String, quantity: i64, price: f64) -> Self {
        let now = timestamp::now();
        Self {
            order_id,
            id: Uuid::new_v4().to_string(),
            product_name,
            quantity,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = timestamp::advance(self.updated_at);
    }
}

/// RFC 3339 UTC timestamps with whole seconds, e.g. `2024-05-01T12:30:00Z`.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Current time truncated to the stored resolution.
    pub fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }

    /// Current time, but never earlier than `previous`.
    pub fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
        now().max(previous)
    }

    /// Serialize as RFC 3339 with a `Z` suffix.
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Parse any RFC 3339 timestamp and normalise it to UTC.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types::AttributeValue;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;
    use std::collections::HashMap;

    fn at(seconds: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, seconds).unwrap()
    }

    #[test]
    fn test_new_order_has_equal_timestamps() {
        let order = Order::new("Alice".to_string(), DEFAULT_STATUS.to_string());
        assert_eq!(order.created_at, order.updated_at);
        assert_eq!(order.status, "new");
        assert!(!order.id.is_empty());
    }

    #[test]
    fn test_generated_ids_differ() {
        let first = OrderItem::new("o-1".to_string(), "Keyboard".to_string(), 1, 10.0);
        let second = OrderItem::new("o-1".to_string(), "Keyboard".to_string(), 1, 10.0);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_touch_never_moves_backwards() {
        let mut order = Order::new("Alice".to_string(), "new".to_string());
        let future = Utc::now() + chrono::Duration::hours(1);
        order.updated_at = future;
        order.touch();
        assert_eq!(order.updated_at, future);
        let created_at = order.created_at;
        order.touch();
        assert_eq!(order.created_at, created_at);
    }

    #[test]
    fn test_order_json_shape() {
        let order = Order {
            id: "o-1".to_string(),
            customer_name: "Alice".to_string(),
            status: "new".to_string(),
            created_at: at(0),
            updated_at: at(5),
        };
        let actual = serde_json::to_value(&order).unwrap();
        let expected = json!({
            "id": "o-1",
            "customer_name": "Alice",
            "status": "new",
            "created_at": "2024-05-01T12:30:00Z",
            "updated_at": "2024-05-01T12:30:05Z",
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_order_item_store_item_shape() {
        let item = OrderItem {
            order_id: "o-1".to_string(),
            id: "i-1".to_string(),
            product_name: "Keyboard".to_string(),
            quantity: 2,
            price: 99.99,
            created_at: at(0),
            updated_at: at(0),
        };
        let actual: HashMap<String, AttributeValue> = serde_dynamo::to_item(&item).unwrap();
        assert_eq!(actual["order_id"], AttributeValue::S("o-1".to_string()));
        assert_eq!(actual["quantity"], AttributeValue::N("2".to_string()));
        assert_eq!(actual["price"], AttributeValue::N("99.99".to_string()));
        assert_eq!(
            actual["created_at"],
            AttributeValue::S("2024-05-01T12:30:00Z".to_string())
        );
        let back: OrderItem = serde_dynamo::from_item(actual).unwrap();
        assert_eq!(back, item);
    }

    #[rstest]
    #[case::utc("2024-05-01T12:30:00Z", at(0))]
    #[case::offset("2024-05-01T14:30:07+02:00", at(7))]
    fn test_timestamp_parsing(#[case] raw: &str, #[case] expected: DateTime<Utc>) {
        let order: Order = serde_json::from_value(json!({
            "id": "o-1",
            "customer_name": "Alice",
            "status": "new",
            "created_at": raw,
            "updated_at": raw,
        }))
        .unwrap();
        assert_eq!(order.created_at, expected);
    }
}
