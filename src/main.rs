//! Nested Report CLI
//!
//! Inspects hierarchical build-quality reports and emits pie and trend
//! chart models from them.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use nested_report_studio::charts::AxisMode;
use nested_report_studio::commands::{
    execute_inspect, execute_pie, execute_trend, validate_args, InspectArgs, PieArgs, TrendArgs,
};

/// Nested Report Studio - hierarchical report aggregation and trends
#[derive(Parser, Debug)]
#[command(name = "nested-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect a report: totals, distribution, children
    Inspect {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Drill-down path of item keys, e.g. "backend/api"
        #[arg(short, long)]
        item: Option<String>,
    },

    /// Emit a pie chart model for one item
    Pie {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Stable key of the item to chart
        #[arg(short, long)]
        item: String,

        /// Output path for the chart model JSON
        #[arg(short, long, default_value = "pie.json")]
        output: PathBuf,
    },

    /// Emit a trend line chart model across builds
    Trend {
        /// Directory of per-build report files (<build-number>.json)
        #[arg(short = 'd', long)]
        input: PathBuf,

        /// Stable key of the item to track
        #[arg(short, long)]
        item: String,

        /// Output path for the chart model JSON
        #[arg(short, long, default_value = "trend.json")]
        output: PathBuf,

        /// X-axis domain: "build" or "date"
        #[arg(long, default_value = "build")]
        axis: String,

        /// Only include builds up to this number
        #[arg(long)]
        up_to: Option<u32>,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Inspect { file, item } => {
            execute_inspect(InspectArgs {
                file,
                item_path: item,
            })?;
        }

        Commands::Pie { file, item, output } => {
            execute_pie(PieArgs { file, item, output })?;
        }

        Commands::Trend {
            input,
            item,
            output,
            axis,
            up_to,
        } => {
            let axis = parse_axis(&axis)?;

            let args = TrendArgs {
                input_dir: input,
                item,
                output,
                axis,
                up_to,
            };

            // Validate args first
            validate_args(&args)?;

            execute_trend(args)?;
        }
    }

    Ok(())
}

/// Map the CLI axis flag onto the chart axis mode
///
/// **Private** - internal CLI plumbing
fn parse_axis(axis: &str) -> Result<AxisMode> {
    match axis {
        "build" => Ok(AxisMode::BuildNumber),
        "date" => Ok(AxisMode::Date),
        other => bail!("Unknown axis '{other}', expected 'build' or 'date'"),
    }
}
