//! Aggregation of item result maps into totals and distributions.
//!
//! This module transforms the raw tree into:
//! - Per-key sums across a set of items (one-level roll-up)
//! - Per-key percentage distributions for bars and pie slices

pub mod distribution;
pub mod sums;

// Re-export main types and functions
pub use distribution::{distribution, KeyShare};
pub use sums::{aggregate, total_of};
