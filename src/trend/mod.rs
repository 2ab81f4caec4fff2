//! Trend-over-builds reconstruction.
//!
//! This module turns an ordered sequence of historical build snapshots
//! into per-key numeric series suitable for line charts.

pub mod history;
pub mod series;

// Re-export main types
pub use history::BuildSnapshot;
pub use series::{SeriesBuilder, SeriesPoint, TrendSeries};
