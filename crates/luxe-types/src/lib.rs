//! Foundation types for the Luxe Furniture catalog.
//!
//! # Key Types
//!
//! - [`FurnitureItem`] -- one catalog record
//! - [`ItemId`] -- opaque, server-assigned record identifier (UUID v7)
//! - [`NewItem`] -- create request body
//! - [`ItemUpdate`] -- update request body (id plus optional fields)
//! - [`CategoryFilter`] -- storefront category selection

pub mod id;
pub mod item;
pub mod storefront;

pub use id::ItemId;
pub use item::{FurnitureItem, ItemUpdate, NewItem};
pub use storefront::{categories, filter_by_category, stock_label, CategoryFilter, ALL_CATEGORIES};
