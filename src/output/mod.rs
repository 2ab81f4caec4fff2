//! File input/output for reports and chart models.

pub mod json;

// Re-export main functions
pub use json::{read_report, report_from_str, write_json};
