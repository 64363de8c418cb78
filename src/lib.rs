#![warn(missing_docs)]

//! # Orders API
//!
//! A CRUD HTTP API for orders and their items, stored in two Amazon DynamoDB
//! tables and served either as a local HTTP listener or behind a managed
//! gateway as a function.
//!
//! ## Overview
//!
//! - Orders are keyed by `id`; items by `(order_id, id)` so the items of an
//!   order live in one partition
//! - Creates are conditional writes, so an existing record is never overwritten
//! - Updates apply only the supplied fields
//! - Deleting an order deletes its items first, a bounded number at a time,
//!   and keeps the order if any item deletion fails
//!
//! ## Quick Example
//!
//! Serve the API over an in-memory repository:
//!
//! ```no_run
//! use orders_api::{repository::InMemoryRepository, router, server};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let router = router::build(Arc::new(InMemoryRepository::new()));
//! server::serve_local(router, 8080).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@config`] - Environment-driven settings
//! - [`mod@store`] - Typed DynamoDB operations (GetItem, Query, Scan, PutItem, DeleteItem)
//! - [`mod@repository`] - Data access over orders and items
//! - [`mod@handlers`] - Validation and HTTP mapping
//! - [`mod@router`] / [`mod@server`] - Routes and the two transport adapters

/// Settings read from the environment and command line.
pub mod config;

/// HTTP handlers, request bodies and error responses.
pub mod handlers;

/// Orders and order items.
pub mod models;

/// Data access layer.
pub mod repository;

/// Route table.
pub mod router;

/// Transport adapters: local listener and function runtime.
pub mod server;

/// Typed operations on DynamoDB tables.
pub mod store;

/// Tracing subscriber setup.
pub mod telemetry;
