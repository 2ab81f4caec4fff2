//! Line chart model for trend series.
//!
//! Turns reconstructed trend series into an x-axis label row plus one
//! aligned value row per result key. Builds where a key has no point
//! stay `null` in that row, so the renderer draws a gap rather than a
//! zero.

use crate::color::ColorProvider;
use crate::trend::series::TrendSeries;
use crate::utils::config::DATE_LABEL_FORMAT;
use serde::Serialize;

/// X-axis domain selection for trend charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// X = build label (ordinal axis)
    BuildNumber,

    /// X = build date
    Date,
}

/// One plotted series (result key) of the line chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    /// Result-map key this series plots
    pub name: String,

    /// Line color
    pub color: String,

    /// One entry per x label; `None` where this build has no point
    pub values: Vec<Option<i64>>,
}

/// UI model for a trend line chart
///
/// **Public** - serialized for the chart renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartModel {
    /// X-axis labels, oldest build first
    pub x_labels: Vec<String>,

    /// One series per result key, in first-seen key order
    pub series: Vec<LineSeries>,
}

/// Build the line chart model from trend series.
///
/// **Public** - main entry point for trend chart data
///
/// The x domain is the set of builds that contributed a point to any
/// series. Switching `mode` only changes the labels; the series values
/// come straight from the already-built points, with no re-aggregation.
pub fn line_model(series: &TrendSeries, mode: AxisMode, colors: &ColorProvider) -> LineChartModel {
    // Collect the x domain: every build seen in any series, ascending.
    // Points within one series are already oldest-first.
    let mut builds: Vec<u32> = Vec::new();
    let mut labels: Vec<String> = Vec::new();

    for (_, points) in series.iter() {
        for point in points {
            if let Err(pos) = builds.binary_search(&point.build) {
                builds.insert(pos, point.build);
                labels.insert(pos, label_for(point, mode));
            }
        }
    }

    let plotted = series
        .iter()
        .map(|(key, points)| {
            let mut values = vec![None; builds.len()];
            for point in points {
                if let Ok(pos) = builds.binary_search(&point.build) {
                    values[pos] = Some(point.value);
                }
            }
            LineSeries {
                name: key.to_string(),
                color: colors.color_of(key).to_string(),
                values,
            }
        })
        .collect();

    LineChartModel {
        x_labels: labels,
        series: plotted,
    }
}

/// X label for one point under the given axis mode
fn label_for(point: &crate::trend::series::SeriesPoint, mode: AxisMode) -> String {
    match mode {
        AxisMode::BuildNumber => point.label.clone(),
        // Date mode falls back to the build label when no timestamp
        // was recorded for the snapshot
        AxisMode::Date => point
            .timestamp
            .map(|ts| ts.format(DATE_LABEL_FORMAT).to_string())
            .unwrap_or_else(|| point.label.clone()),
    }
}
