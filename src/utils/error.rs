//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised when a report fails load-time validation.
///
/// Lookup misses are NOT errors - they surface as `Option::None`. Only
/// malformed data reaches this type; the model never silently repairs it.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("item id must not be empty")]
    EmptyId,

    #[error("negative count {value} for key '{key}' in item '{id}'")]
    NegativeCount {
        id: String,
        key: String,
        value: i64,
    },
}

/// Errors from trend series construction.
///
/// These flag caller precondition violations. Silently reordering the
/// snapshots could mask caller bugs, so the builder refuses instead.
#[derive(Error, Debug)]
pub enum TrendError {
    #[error("build numbers must be strictly increasing: got {next} after {prev}")]
    UnorderedBuilds { prev: u32, next: u32 },
}

/// Errors that can occur during file input/output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to write file: {0}")]
    WriteFailed(std::io::Error),

    #[error("Failed to de/serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid report: {0}")]
    InvalidReport(#[from] ModelError),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
