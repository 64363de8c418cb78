use crate::handlers::error::ApiError;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

/// Decode a JSON body; anything unreadable is a bad request.
pub fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|error| ApiError::BadRequest(error.to_string()))
}

/// A field that must be present.
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::BadRequest(format!("{field} is required")))
}

/// A text field that must be present and non-empty.
pub fn required_text(field: &str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(format!("{field} is required"))),
    }
}

/// A text field that, when supplied, must be non-empty.
pub fn non_empty(field: &str, value: String) -> Result<String, ApiError> {
    if value.is_empty() {
        return Err(ApiError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(value)
}

/// Item quantity, at least 1.
pub fn quantity(value: i64) -> Result<i64, ApiError> {
    if value < 1 {
        return Err(ApiError::BadRequest("quantity must be >= 1".to_string()));
    }
    Ok(value)
}

/// Item price, never negative.
pub fn price(value: f64) -> Result<f64, ApiError> {
    if value < 0.0 {
        return Err(ApiError::BadRequest("price must be >= 0".to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde::Deserialize;

    #[rstest]
    #[case::negative(-3, false)]
    #[case::zero(0, false)]
    #[case::one(1, true)]
    #[case::many(1_000, true)]
    fn test_quantity(#[case] value: i64, #[case] valid: bool) {
        assert_eq!(quantity(value).is_ok(), valid);
    }

    #[rstest]
    #[case::negative(-0.01, false)]
    #[case::zero(0.0, true)]
    #[case::positive(99.99, true)]
    fn test_price(#[case] value: f64, #[case] valid: bool) {
        assert_eq!(price(value).is_ok(), valid);
    }

    #[rstest]
    #[case::missing(None, Err(ApiError::BadRequest("customer_name is required".to_string())))]
    #[case::empty(Some(""), Err(ApiError::BadRequest("customer_name is required".to_string())))]
    #[case::present(Some("Alice"), Ok("Alice".to_string()))]
    fn test_required_text(#[case] value: Option<&str>, #[case] expected: Result<String, ApiError>) {
        assert_eq!(
            required_text("customer_name", value.map(str::to_string)),
            expected
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(
            non_empty("product_name", String::new()),
            Err(ApiError::BadRequest("product_name must not be empty".to_string()))
        );
        assert_eq!(non_empty("product_name", "Mouse".to_string()), Ok("Mouse".to_string()));
    }

    #[derive(Debug, Deserialize)]
    struct Body {
        #[allow(dead_code)]
        quantity: Option<i64>,
    }

    #[rstest]
    #[case::empty(b"".as_slice())]
    #[case::not_json(b"quantity=2".as_slice())]
    #[case::wrong_type(br#"{"quantity": "two"}"#.as_slice())]
    #[case::null(b"null".as_slice())]
    fn test_decode_rejects(#[case] raw: &'static [u8]) {
        let result = decode::<Body>(&Bytes::from_static(raw));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
