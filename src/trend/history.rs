//! Historical build snapshots.
//!
//! A snapshot is one prior build's view of the report tree. The history
//! provider (CI integration, or the `trend` command's directory reader)
//! assembles these in build order; a build that produced no report still
//! appears, with `report` unset, so the series builder can record a gap.

use crate::model::schema::Report;
use chrono::{DateTime, Utc};

/// The report state persisted for one historical build
///
/// **Public** - input to `SeriesBuilder`
#[derive(Debug, Clone)]
pub struct BuildSnapshot {
    /// Build number, strictly increasing across a history sequence
    pub number: u32,

    /// Display label of the build (e.g. "#42")
    pub label: String,

    /// Build timestamp, used for date-mode chart labels when present
    pub timestamp: Option<DateTime<Utc>>,

    /// The report attached to this build, if it produced one
    pub report: Option<Report>,
}

impl BuildSnapshot {
    /// Snapshot carrying a report
    pub fn new(number: u32, label: impl Into<String>, report: Report) -> Self {
        Self {
            number,
            label: label.into(),
            timestamp: None,
            report: Some(report),
        }
    }

    /// Snapshot for a build that produced no report
    pub fn missing(number: u32, label: impl Into<String>) -> Self {
        Self {
            number,
            label: label.into(),
            timestamp: None,
            report: None,
        }
    }

    /// Attach a build timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
