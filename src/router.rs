use crate::handlers::{self, SharedRepository, error::ApiError, items, orders};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the application router over `repository`.
///
/// The same router is served by both transport adapters in [`crate::server`].
pub fn build(repository: SharedRepository) -> Router {
    Router::new()
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/{order_id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .route(
            "/orders/{order_id}/items",
            get(items::list_items).post(items::create_item),
        )
        .route(
            "/orders/{order_id}/items/{item_id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/openapi.json", get(handlers::openapi))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(repository)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("route not found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("method not allowed".to_string())
}
