use crate::{
    handlers::{
        SharedRepository,
        error::{ApiError, ErrorBody},
        extract::Path,
        validation,
    },
    models::{DEFAULT_STATUS, Order},
};

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

/// Body of `POST /orders`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Required, non-empty.
    pub customer_name: Option<String>,
    /// Defaults to `"new"` when absent or empty.
    pub status: Option<String>,
}

/// Body of `PUT /orders/{order_id}`; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    /// Non-empty when present.
    pub customer_name: Option<String>,
    /// Replaces the status verbatim.
    pub status: Option<String>,
}

fn order_not_found() -> ApiError {
    ApiError::NotFound("order not found".to_string())
}

/// List every order.
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    responses(
        (status = 200, description = "All orders", body = [Order]),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn list_orders(
    State(repository): State<SharedRepository>,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(repository.list_orders().await?))
}

/// Create an order.
#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Created order", body = Order),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn create_order(
    State(repository): State<SharedRepository>,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let request: CreateOrderRequest = validation::decode(&body)?;
    let customer_name = validation::required_text("customer_name", request.customer_name)?;
    let status = request
        .status
        .filter(|status| !status.is_empty())
        .unwrap_or_else(|| DEFAULT_STATUS.to_string());
    let order = Order::new(customer_name, status);
    repository.create_order(&order).await?;
    info!(order_id = %order.id, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// Fetch one order.
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    tag = "orders",
    params(("order_id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "No such order", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn get_order(
    State(repository): State<SharedRepository>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    repository
        .get_order(&order_id)
        .await?
        .map(Json)
        .ok_or_else(order_not_found)
}

/// Apply the supplied fields to an order.
#[utoipa::path(
    put,
    path = "/orders/{order_id}",
    tag = "orders",
    params(("order_id" = String, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 404, description = "No such order", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn update_order(
    State(repository): State<SharedRepository>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> Result<Json<Order>, ApiError> {
    let mut order = repository
        .get_order(&order_id)
        .await?
        .ok_or_else(order_not_found)?;
    let request: UpdateOrderRequest = validation::decode(&body)?;
    if let Some(customer_name) = request.customer_name {
        order.customer_name = validation::non_empty("customer_name", customer_name)?;
    }
    if let Some(status) = request.status {
        order.status = status;
    }
    order.touch();
    repository.update_order(&order).await?;
    Ok(Json(order))
}

/// Delete an order and all of its items.
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    tag = "orders",
    params(("order_id" = String, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order and items deleted, or already absent"),
        (status = 500, description = "Store failure; the order is kept if any item remains", body = ErrorBody),
    )
)]
pub async fn delete_order(
    State(repository): State<SharedRepository>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    repository.delete_order(&order_id).await?;
    info!(%order_id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
