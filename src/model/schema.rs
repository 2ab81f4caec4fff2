//! Report data model and wire schema.
//!
//! This module defines the structure of report JSON files:
//! a `Report` owning a forest of `Item` nodes plus a color mapping.
//! Items are read-only after load; ownership is a strict tree (each
//! item belongs to exactly one parent or to the report root), so
//! cycles cannot occur by construction.

use super::ordered_map::OrderedMap;
use crate::utils::error::ModelError;
use serde::{Deserialize, Serialize};

/// Result map: metric-category key to count, insertion-ordered.
///
/// Values are validated non-negative at load time. The type is `i64`
/// rather than `u64` so defensive paths (aggregation over data that
/// bypassed validation) preserve negatives instead of wrapping.
pub type ResultMap = OrderedMap<i64>;

/// Color mapping: result key to color string (e.g. "#EF9A9A")
pub type ColorMap = OrderedMap<String>;

/// One node in the hierarchical report tree
///
/// **Public** - core data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity, unique among siblings. Used directly as the
    /// lookup key for navigation and cross-build matching - never a
    /// runtime hash.
    pub id: String,

    /// Human-readable label
    #[serde(default)]
    pub name: String,

    /// Leaf-level measurement for this item. For non-leaf items the
    /// producer pre-aggregates child sums into this field at ingestion;
    /// `aggregate` re-derives one level on demand.
    #[serde(default)]
    pub result: ResultMap,

    /// Child items; empty for a leaf
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

impl Item {
    /// Sum of all values in this item's own result map.
    ///
    /// Returns 0 for an empty map; percentage math guards the
    /// zero-total case separately.
    pub fn total(&self) -> i64 {
        self.result.values().sum()
    }

    /// True if this item has no children
    pub fn is_leaf(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate this item and its whole subtree.
    ///
    /// **Public** - called on every loaded report
    ///
    /// # Errors
    /// * `ModelError::EmptyId` - an item with an empty id
    /// * `ModelError::NegativeCount` - a result value below zero
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.is_empty() {
            return Err(ModelError::EmptyId);
        }

        for (key, value) in self.result.iter() {
            if *value < 0 {
                return Err(ModelError::NegativeCount {
                    id: self.id.clone(),
                    key: key.to_string(),
                    value: *value,
                });
            }
        }

        for child in &self.items {
            child.validate()?;
        }

        Ok(())
    }
}

/// Top-level report: the forest of root items plus the color mapping.
///
/// Deserialized once per build, immutable afterwards, owned by the
/// build record that produced it. Both fields are required on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Root items of the report tree
    pub items: Vec<Item>,

    /// Result key to color string, covering the keys used in the tree
    pub colors: ColorMap,
}

impl Report {
    /// Aggregate the results of all root items, values summed per key
    pub fn aggregate(&self) -> ResultMap {
        crate::aggregator::aggregate(&self.items)
    }

    /// Validate every item tree in the report
    ///
    /// # Errors
    /// Propagates the first `ModelError` found in any subtree
    pub fn validate(&self) -> Result<(), ModelError> {
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}
