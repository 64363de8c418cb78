use crate::{
    handlers::{
        SharedRepository,
        error::{ApiError, ErrorBody},
        extract::Path,
        validation,
    },
    models::OrderItem,
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

/// Body of `POST /orders/{order_id}/items`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Required, non-empty.
    pub product_name: Option<String>,
    /// Required, at least 1.
    pub quantity: Option<i64>,
    /// Required, never negative.
    pub price: Option<f64>,
}

/// Body of `PUT /orders/{order_id}/items/{item_id}`; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    /// Non-empty when present.
    pub product_name: Option<String>,
    /// At least 1 when present.
    pub quantity: Option<i64>,
    /// Never negative when present.
    pub price: Option<f64>,
}

fn item_not_found() -> ApiError {
    ApiError::NotFound("item not found".to_string())
}

/// List the items of an order.
#[utoipa::path(
    get,
    path = "/orders/{order_id}/items",
    tag = "items",
    params(("order_id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Items of the order", body = [OrderItem]),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn list_items(
    State(repository): State<SharedRepository>,
    Path(order_id): Path<String>,
) -> Result<Json<Vec<OrderItem>>, ApiError> {
    Ok(Json(repository.list_order_items(&order_id).await?))
}

/// Add an item to an existing order.
#[utoipa::path(
    post,
    path = "/orders/{order_id}/items",
    tag = "items",
    params(("order_id" = String, Path, description = "Order id")),
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Created item", body = OrderItem),
        (status = 400, description = "Invalid body or unknown order", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn create_item(
    State(repository): State<SharedRepository>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<OrderItem>), ApiError> {
    if repository.get_order(&order_id).await?.is_none() {
        return Err(ApiError::BadRequest("order does not exist".to_string()));
    }
    let request: CreateItemRequest = validation::decode(&body)?;
    let product_name = validation::required_text("product_name", request.product_name)?;
    let quantity = validation::quantity(validation::required("quantity", request.quantity)?)?;
    let price = validation::price(validation::required("price", request.price)?)?;
    let item = OrderItem::new(order_id, product_name, quantity, price);
    repository.create_order_item(&item).await?;
    info!(order_id = %item.order_id, item_id = %item.id, "order item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Fetch one item.
#[utoipa::path(
    get,
    path = "/orders/{order_id}/items/{item_id}",
    tag = "items",
    params(
        ("order_id" = String, Path, description = "Order id"),
        ("item_id" = String, Path, description = "Item id"),
    ),
    responses(
        (status = 200, description = "The item", body = OrderItem),
        (status = 404, description = "No such item", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn get_item(
    State(repository): State<SharedRepository>,
    Path((order_id, item_id)): Path<(String, String)>,
) -> Result<Json<OrderItem>, ApiError> {
    repository
        .get_order_item(&order_id, &item_id)
        .await?
        .map(Json)
        .ok_or_else(item_not_found)
}

/// Apply the supplied fields to an item.
///
/// Every supplied field is checked before any is applied.
#[utoipa::path(
    put,
    path = "/orders/{order_id}/items/{item_id}",
    tag = "items",
    params(
        ("order_id" = String, Path, description = "Order id"),
        ("item_id" = String, Path, description = "Item id"),
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated item", body = OrderItem),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 404, description = "No such item", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn update_item(
    State(repository): State<SharedRepository>,
    Path((order_id, item_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<OrderItem>, ApiError> {
    let mut item = repository
        .get_order_item(&order_id, &item_id)
        .await?
        .ok_or_else(item_not_found)?;
    let request: UpdateItemRequest = validation::decode(&body)?;
    let product_name = request
        .product_name
        .map(|value| validation::non_empty("product_name", value))
        .transpose()?;
    let quantity = request.quantity.map(validation::quantity).transpose()?;
    let price = request.price.map(validation::price).transpose()?;

    if let Some(product_name) = product_name {
        item.product_name = product_name;
    }
    if let Some(quantity) = quantity {
        item.quantity = quantity;
    }
    if let Some(price) = price {
        item.price = price;
    }
    item.touch();
    repository.update_order_item(&item).await?;
    Ok(Json(item))
}

/// Delete one item.
#[utoipa::path(
    delete,
    path = "/orders/{order_id}/items/{item_id}",
    tag = "items",
    params(
        ("order_id" = String, Path, description = "Order id"),
        ("item_id" = String, Path, description = "Item id"),
    ),
    responses(
        (status = 204, description = "Item deleted, or already absent"),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn delete_item(
    State(repository): State<SharedRepository>,
    Path((order_id, item_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    repository.delete_order_item(&order_id, &item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
