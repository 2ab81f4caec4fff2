//! JSON report reader and chart-model writer.
//!
//! Reading validates the report before handing it out: callers either
//! get a fully valid tree or an error, never a partially-valid one.

use crate::model::schema::Report;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Read and validate a report from a JSON file
///
/// **Public** - main entry point for report loading
///
/// # Errors
/// * `OutputError::ReadFailed` - I/O error
/// * `OutputError::SerializationFailed` - malformed JSON or missing
///   required fields
/// * `OutputError::InvalidReport` - structurally valid JSON that fails
///   model validation (empty id, negative count)
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let report: Report = serde_json::from_reader(file)?;
    report.validate()?;

    debug!(
        "Report loaded: {} root items, {} colors",
        report.items.len(),
        report.colors.len()
    );

    Ok(report)
}

/// Parse and validate a report from a JSON string
///
/// **Public** - used by tests and in-memory callers
pub fn report_from_str(json: &str) -> Result<Report, OutputError> {
    let report: Report = serde_json::from_str(json)?;
    report.validate()?;
    Ok(report)
}

/// Write any serializable model (report or chart data) as pretty JSON
///
/// **Public** - shared writer for `Report`, `PieChartModel`,
/// `LineChartModel`
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path or path is a directory
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_json<T: Serialize>(
    model: &T,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, model)?;

    Ok(())
}

/// Validate that the output path is usable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
