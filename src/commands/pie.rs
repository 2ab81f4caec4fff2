//! Pie command implementation.
//!
//! Emits the pie chart model for one item of a report as JSON.

use crate::charts::pie_model;
use crate::color::ColorProvider;
use crate::model::lookup::find_in_forest;
use crate::output::{read_report, write_json};
use anyhow::{bail, Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the pie command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PieArgs {
    /// Path to the report JSON file
    pub file: PathBuf,

    /// Stable key of the item to chart
    pub item: String,

    /// Output path for the chart model JSON
    pub output: PathBuf,
}

/// Execute the pie command
///
/// **Public** - main entry point called from main.rs
pub fn execute_pie(args: PieArgs) -> Result<()> {
    info!("Building pie chart for '{}' from {}", args.item, args.file.display());

    let report = read_report(&args.file)
        .with_context(|| format!("Failed to load report {}", args.file.display()))?;

    let Some(item) = find_in_forest(&report.items, &args.item) else {
        bail!("No item with key '{}' in report", args.item);
    };

    let colors = ColorProvider::new(report.colors.clone());
    let model = pie_model(item, &colors);

    write_json(&model, &args.output).context("Failed to write pie chart model")?;

    println!("Pie chart model written to {}", args.output.display());

    Ok(())
}
