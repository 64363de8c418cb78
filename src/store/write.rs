//! Write operations.
//!
//! - Putting whole items, optionally guarded by a condition
//! - Deleting items by primary key

/// Arguments shared by write operations.
pub mod common;

/// Delete item operation for removing items from tables.
pub mod delete_item;

/// Put item operation for creating or replacing items.
pub mod put_item;
