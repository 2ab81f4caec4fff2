//! Trend command implementation.
//!
//! The trend command is the file-based history provider: a directory of
//! report files named by build number (`1.json`, `2.json`, ...) stands
//! in for the CI server's build list. The command:
//! 1. Scans the directory and orders snapshots by build number
//! 2. Reconstructs per-key series for the target item up to a cutoff
//! 3. Writes the line chart model as JSON

use crate::charts::{line_model, AxisMode};
use crate::color::ColorProvider;
use crate::model::schema::ColorMap;
use crate::output::{read_report, write_json};
use crate::trend::{BuildSnapshot, SeriesBuilder};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Arguments for the trend command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TrendArgs {
    /// Directory containing per-build report files
    pub input_dir: PathBuf,

    /// Stable key of the item to track
    pub item: String,

    /// Output path for the chart model JSON
    pub output: PathBuf,

    /// X-axis domain (build number or date)
    pub axis: AxisMode,

    /// Only include builds up to this number (default: all)
    pub up_to: Option<u32>,
}

/// Validate trend arguments before executing
///
/// **Public** - called from main.rs
pub fn validate_args(args: &TrendArgs) -> Result<()> {
    if !args.input_dir.is_dir() {
        bail!("Input path is not a directory: {}", args.input_dir.display());
    }
    if args.item.is_empty() {
        bail!("Item key must not be empty");
    }
    Ok(())
}

/// Execute the trend command
///
/// **Public** - main entry point called from main.rs
pub fn execute_trend(args: TrendArgs) -> Result<()> {
    info!(
        "Building trend for '{}' from {}",
        args.item,
        args.input_dir.display()
    );

    let snapshots = load_snapshots(&args.input_dir)?;
    if snapshots.is_empty() {
        warn!("No numbered report files found in {}", args.input_dir.display());
    }

    let cutoff = args
        .up_to
        .or_else(|| snapshots.last().map(|s| s.number))
        .unwrap_or(0);

    let series = SeriesBuilder::new(&args.item, cutoff)
        .build(&snapshots)
        .context("Failed to build trend series")?;

    // Colors come from the newest report inside the cutoff, the same
    // view the chart belongs to
    let colors = snapshots
        .iter()
        .rev()
        .filter(|s| s.number <= cutoff)
        .find_map(|s| s.report.as_ref().map(|r| r.colors.clone()))
        .unwrap_or_else(ColorMap::new);

    let model = line_model(&series, args.axis, &ColorProvider::new(colors));

    write_json(&model, &args.output).context("Failed to write trend chart model")?;

    println!(
        "Trend chart model written to {} ({} series, {} builds)",
        args.output.display(),
        model.series.len(),
        model.x_labels.len()
    );

    Ok(())
}

/// Load snapshots from a directory of `<build-number>.json` files.
///
/// **Private** - the file-based history provider
///
/// Files whose stem is not a number are skipped. A file that fails to
/// load is kept as a report-less snapshot, so the build still appears
/// in the history as a gap rather than silently vanishing.
fn load_snapshots(dir: &Path) -> Result<Vec<BuildSnapshot>> {
    let mut snapshots: Vec<BuildSnapshot> = Vec::new();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let Some(number) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<u32>().ok())
        else {
            warn!("Skipping non-numbered file: {}", path.display());
            continue;
        };

        let mut snapshot = match read_report(&path) {
            Ok(report) => BuildSnapshot::new(number, format!("#{number}"), report),
            Err(e) => {
                warn!("Build {} has no usable report: {}", number, e);
                BuildSnapshot::missing(number, format!("#{number}"))
            }
        };

        if let Some(timestamp) = file_timestamp(&path) {
            snapshot = snapshot.with_timestamp(timestamp);
        }

        snapshots.push(snapshot);
    }

    // File order is platform-dependent; the series builder requires
    // strictly increasing build numbers
    snapshots.sort_by_key(|s| s.number);

    Ok(snapshots)
}

/// Modification time of a report file, as the build timestamp
fn file_timestamp(path: &Path) -> Option<DateTime<Utc>> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}
