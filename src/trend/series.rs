//! Trend series reconstruction across historical snapshots.
//!
//! Given the ordered history of builds and a target item's stable key,
//! this rebuilds one time series per result key: where the item was
//! measured, the build contributes a point; where it is absent (build
//! without a report, or the item not yet / no longer present), the
//! series simply has a gap. Gaps are skipped, never zero-filled.

use super::history::BuildSnapshot;
use crate::model::lookup::find_in_forest;
use crate::model::ordered_map::OrderedMap;
use crate::utils::error::TrendError;
use chrono::{DateTime, Utc};
use log::debug;

/// One data point in a trend series.
///
/// Carries the build number, label, and timestamp together so either
/// chart axis mode (build number or date) can render the point without
/// re-running the reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Build number this point belongs to
    pub build: u32,

    /// Display label of the build
    pub label: String,

    /// Build timestamp, if the snapshot carried one
    pub timestamp: Option<DateTime<Utc>>,

    /// Count recorded for the series key at this build
    pub value: i64,
}

/// Per-key trend series, keyed in first-seen result-map order
pub type TrendSeries = OrderedMap<Vec<SeriesPoint>>;

/// Builds per-key trend series for one target item.
///
/// **Public** - main entry point for trend reconstruction
///
/// The builder applies the cutoff itself: snapshots with a build number
/// above `cutoff` are excluded entirely and never appear, not even as
/// gaps. Snapshot ordering is a caller precondition and is checked,
/// not repaired.
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    target_key: String,
    cutoff: u32,
}

impl SeriesBuilder {
    /// Create a builder for the item with the given stable key,
    /// bounded above by the build currently being viewed
    pub fn new(target_key: impl Into<String>, cutoff: u32) -> Self {
        Self {
            target_key: target_key.into(),
            cutoff,
        }
    }

    /// Reconstruct the per-key series over `snapshots`.
    ///
    /// # Arguments
    /// * `snapshots` - history in chronological order, oldest first
    ///
    /// # Returns
    /// One series per result key of the target item. An empty history,
    /// or a target that never resolves, yields an empty map - both are
    /// normal outcomes, not errors.
    ///
    /// # Errors
    /// * `TrendError::UnorderedBuilds` - build numbers not strictly
    ///   increasing (covers duplicates)
    pub fn build(&self, snapshots: &[BuildSnapshot]) -> Result<TrendSeries, TrendError> {
        check_ordering(snapshots)?;

        let mut series = TrendSeries::new();
        let mut resolved = 0usize;

        for snapshot in snapshots {
            if snapshot.number > self.cutoff {
                continue;
            }

            // A build without a report, or without the item, is a gap
            let Some(report) = &snapshot.report else {
                continue;
            };
            let Some(item) = find_in_forest(&report.items, &self.target_key) else {
                continue;
            };

            resolved += 1;
            for (key, value) in item.result.iter() {
                let point = SeriesPoint {
                    build: snapshot.number,
                    label: snapshot.label.clone(),
                    timestamp: snapshot.timestamp,
                    value: *value,
                };
                match series.get_mut(key) {
                    Some(points) => points.push(point),
                    None => {
                        series.insert(key, vec![point]);
                    }
                }
            }
        }

        debug!(
            "Built {} series for '{}' from {} of {} snapshots",
            series.len(),
            self.target_key,
            resolved,
            snapshots.len()
        );

        Ok(series)
    }
}

/// Verify build numbers are strictly increasing.
///
/// Reordering here could mask a caller bug, so the sequence is
/// rejected instead.
fn check_ordering(snapshots: &[BuildSnapshot]) -> Result<(), TrendError> {
    for pair in snapshots.windows(2) {
        if pair[1].number <= pair[0].number {
            return Err(TrendError::UnorderedBuilds {
                prev: pair[0].number,
                next: pair[1].number,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::{ColorMap, Item, Report, ResultMap};

    fn report_with(id: &str, result: ResultMap) -> Report {
        Report {
            items: vec![Item {
                id: id.to_string(),
                name: id.to_string(),
                result,
                items: Vec::new(),
            }],
            colors: ColorMap::new(),
        }
    }

    #[test]
    fn test_missing_snapshot_leaves_gap() {
        let snapshots = vec![
            BuildSnapshot::new(1, "#1", report_with("X", ResultMap::from([("A", 1)]))),
            BuildSnapshot::missing(2, "#2"),
            BuildSnapshot::new(3, "#3", report_with("X", ResultMap::from([("A", 4)]))),
        ];

        let series = SeriesBuilder::new("X", 3).build(&snapshots).unwrap();

        let points = series.get("A").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].build, points[0].value), (1, 1));
        assert_eq!((points[1].build, points[1].value), (3, 4));
    }

    #[test]
    fn test_cutoff_excludes_later_builds() {
        let snapshots = vec![
            BuildSnapshot::new(1, "#1", report_with("X", ResultMap::from([("A", 1)]))),
            BuildSnapshot::new(2, "#2", report_with("X", ResultMap::from([("A", 2)]))),
            BuildSnapshot::new(3, "#3", report_with("X", ResultMap::from([("A", 3)]))),
        ];

        let series = SeriesBuilder::new("X", 2).build(&snapshots).unwrap();

        let points = series.get("A").unwrap();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.build <= 2));
    }

    #[test]
    fn test_unordered_builds_fail_fast() {
        let snapshots = vec![
            BuildSnapshot::missing(2, "#2"),
            BuildSnapshot::missing(1, "#1"),
        ];

        let err = SeriesBuilder::new("X", 10).build(&snapshots).unwrap_err();
        assert!(matches!(
            err,
            TrendError::UnorderedBuilds { prev: 2, next: 1 }
        ));
    }

    #[test]
    fn test_duplicate_build_numbers_fail_fast() {
        let snapshots = vec![
            BuildSnapshot::missing(5, "#5"),
            BuildSnapshot::missing(5, "#5"),
        ];

        assert!(SeriesBuilder::new("X", 10).build(&snapshots).is_err());
    }

    #[test]
    fn test_empty_history_yields_empty_series() {
        let series = SeriesBuilder::new("X", 100).build(&[]).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_never_resolving_target_yields_empty_series() {
        let snapshots = vec![BuildSnapshot::new(
            1,
            "#1",
            report_with("other", ResultMap::from([("A", 1)])),
        )];

        let series = SeriesBuilder::new("X", 10).build(&snapshots).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_target_matched_at_any_depth() {
        let nested = Report {
            items: vec![Item {
                id: "root".to_string(),
                name: String::new(),
                result: ResultMap::new(),
                items: vec![Item {
                    id: "X".to_string(),
                    name: String::new(),
                    result: ResultMap::from([("B", 9)]),
                    items: Vec::new(),
                }],
            }],
            colors: ColorMap::new(),
        };
        let snapshots = vec![BuildSnapshot::new(7, "#7", nested)];

        let series = SeriesBuilder::new("X", 7).build(&snapshots).unwrap();
        assert_eq!(series.get("B").unwrap()[0].value, 9);
    }

    #[test]
    fn test_key_set_may_vary_across_snapshots() {
        let snapshots = vec![
            BuildSnapshot::new(1, "#1", report_with("X", ResultMap::from([("A", 1)]))),
            BuildSnapshot::new(2, "#2", report_with("X", ResultMap::from([("A", 2), ("B", 5)]))),
        ];

        let series = SeriesBuilder::new("X", 2).build(&snapshots).unwrap();

        assert_eq!(series.get("A").unwrap().len(), 2);
        // "B" only appears from build 2 on
        let b_points = series.get("B").unwrap();
        assert_eq!(b_points.len(), 1);
        assert_eq!(b_points[0].build, 2);
    }
}
