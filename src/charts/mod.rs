//! Serializable chart models.
//!
//! This module builds renderer-agnostic chart data:
//! - Pie charts of one item's result distribution
//! - Line charts of trend series across builds

pub mod line;
pub mod pie;

// Re-export main types and functions
pub use line::{line_model, AxisMode, LineChartModel, LineSeries};
pub use pie::{pie_model, PieChartModel, PieData};
