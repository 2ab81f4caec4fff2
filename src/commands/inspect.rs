//! Inspect command implementation.
//!
//! The inspect command:
//! 1. Reads and validates a report file
//! 2. Resolves an optional drill-down path, one direct child per segment
//! 3. Prints the aggregated totals and per-key distribution

use crate::aggregator::distribution;
use crate::model::lookup::find_child;
use crate::model::schema::{Item, Report};
use crate::output::read_report;
use anyhow::{bail, Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the inspect command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Path to the report JSON file
    pub file: PathBuf,

    /// Drill-down path of stable keys, e.g. "backend/api"
    pub item_path: Option<String>,
}

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * File read or validation errors
/// * An item path segment that resolves to no direct child
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    info!("Inspecting report: {}", args.file.display());

    let report = read_report(&args.file)
        .with_context(|| format!("Failed to load report {}", args.file.display()))?;

    match args.item_path.as_deref() {
        None => print_report_summary(&report),
        Some(path) => {
            let item = resolve_path(&report, path)?;
            print_item_summary(item);
        }
    }

    Ok(())
}

/// Resolve a slash-separated drill-down path against the report.
///
/// The first segment selects a root item; every further segment selects
/// a direct child only, matching the navigation contract. A miss at CLI
/// level is an error with the failing segment named - the interactive
/// navigation layer would redirect to the parent instead.
fn resolve_path<'a>(report: &'a Report, path: &str) -> Result<&'a Item> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let first = segments
        .next()
        .context("Item path must contain at least one key")?;
    let mut current = match report.items.iter().find(|item| item.id == first) {
        Some(item) => item,
        None => bail!("No root item with key '{first}'"),
    };

    for segment in segments {
        current = match find_child(current, segment) {
            Some(child) => child,
            None => bail!("'{}' has no direct child '{segment}'", current.id),
        };
    }

    Ok(current)
}

/// Print the whole-report roll-up
fn print_report_summary(report: &Report) {
    let totals = report.aggregate();

    println!("Report: {} root item(s)", report.items.len());
    println!();
    println!("Aggregated totals:");
    for (key, value) in totals.iter() {
        println!("  {key}: {value}");
    }
    println!();
    println!("Root items:");
    for item in &report.items {
        println!("  {} ({}) - total {}", item.id, item.name, item.total());
    }
}

/// Print one item's distribution and children
fn print_item_summary(item: &Item) {
    println!("Item: {} ({})", item.id, item.name);
    println!("Total: {}", item.total());
    println!();
    println!("Distribution:");
    for share in distribution(item) {
        println!("  {}: {} ({:.2}%)", share.key, share.count, share.percentage);
    }

    if !item.items.is_empty() {
        println!();
        println!("Children:");
        for child in &item.items {
            println!("  {} ({}) - total {}", child.id, child.name, child.total());
        }
    }
}
