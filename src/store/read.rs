//! Read operations.
//!
//! - Getting a single item by primary key
//! - Querying the items of one partition
//! - Scanning a whole table
//!
//! Query and Scan return a single page: callers get at most one response's
//! worth of items and no continuation key.

/// Get item operation for retrieving a single item by primary key.
pub mod get_item;

/// Query operation for retrieving the items sharing a partition key.
pub mod query;

/// Scan operation for retrieving the items of a table.
pub mod scan;
