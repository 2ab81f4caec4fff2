//! Hierarchical report data model.
//!
//! This module handles:
//! - The `Item` / `Report` tree structure and its wire schema
//! - Insertion-ordered result and color maps
//! - Lookup of items by stable key

pub mod lookup;
pub mod ordered_map;
pub mod schema;

// Re-export main types
pub use lookup::{find_child, find_in_forest};
pub use ordered_map::OrderedMap;
pub use schema::{ColorMap, Item, Report, ResultMap};
