//! Configuration and constants for the CLI.

/// Fallback color for result keys without a mapping entry.
/// A missing color is recoverable; rendering falls back to gray.
pub const DEFAULT_COLOR: &str = "#9E9E9E";

/// Date label format for date-mode trend charts
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";
