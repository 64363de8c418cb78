use crate::handlers::error::ApiError;

use axum::{
    extract::{FromRequestParts, Path as RawPath},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Path parameters whose rejection is rendered as an [`ApiError`].
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RawPath(value) = RawPath::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
