//! HTTP handlers.
//!
//! Handlers own validation and defaulting; everything else is delegated to the
//! [`Repository`](crate::repository::Repository) held in the router state.
//! Existence checks always run before the request body is decoded.

/// Error responses.
pub mod error;

/// Request extractors with JSON rejections.
pub mod extract;

/// Order item endpoints.
pub mod items;

/// Order endpoints.
pub mod orders;

/// Field rules shared by the endpoints.
pub mod validation;

use crate::{
    handlers::error::ErrorBody,
    models::{Order, OrderItem},
    repository::Repository,
};

use axum::Json;
use std::sync::Arc;
use utoipa::OpenApi;

/// Repository handle shared by every request.
pub type SharedRepository = Arc<dyn Repository>;

/// OpenAPI description of the service.
#[derive(OpenApi)]
#[openapi(
    info(title = "Orders API", description = "CRUD over orders and their items"),
    paths(
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        items::list_items,
        items::create_item,
        items::get_item,
        items::update_item,
        items::delete_item,
    ),
    components(schemas(
        Order,
        OrderItem,
        ErrorBody,
        orders::CreateOrderRequest,
        orders::UpdateOrderRequest,
        items::CreateItemRequest,
        items::UpdateItemRequest,
    )),
    tags(
        (name = "orders", description = "Orders"),
        (name = "items", description = "Items of an order"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
