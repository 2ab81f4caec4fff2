//! Per-key distribution with percentages.
//!
//! Renderers draw distribution bars and pie slices from per-key counts
//! plus their share of the item total. Percentage math guards the
//! zero-total case explicitly instead of propagating a division fault.

use crate::model::schema::Item;
use log::debug;
use serde::Serialize;

/// One result key's share of an item's total
///
/// **Public** - consumed by table/chart renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyShare {
    /// Result-map key (metric category)
    pub key: String,

    /// Raw count for this key
    pub count: i64,

    /// Share of the item total, in percent (0.0 when the total is 0)
    pub percentage: f64,
}

/// Compute the per-key distribution of an item's own result map.
///
/// **Public** - main entry point for percentage computation
///
/// # Returns
/// One `KeyShare` per result key, in result-map order. An all-zero or
/// empty result map yields 0.0 percent for every key rather than NaN.
pub fn distribution(item: &Item) -> Vec<KeyShare> {
    let total = item.total();
    debug!("Computing distribution for '{}' (total {})", item.id, total);

    item.result
        .iter()
        .map(|(key, count)| KeyShare {
            key: key.to_string(),
            count: *count,
            percentage: share_of(*count, total),
        })
        .collect()
}

/// Percentage of `count` against `total`, 0.0 when `total` is not positive
fn share_of(count: i64, total: i64) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::ResultMap;

    fn leaf(id: &str, result: ResultMap) -> Item {
        Item {
            id: id.to_string(),
            name: String::new(),
            result,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_distribution_percentages() {
        let item = leaf("api", ResultMap::from([("PASSED", 3), ("FAILED", 1)]));

        let shares = distribution(&item);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].key, "PASSED");
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(shares[1].percentage, 25.0);
    }

    #[test]
    fn test_distribution_all_zero_total() {
        let item = leaf("idle", ResultMap::from([("A", 0), ("B", 0)]));

        let shares = distribution(&item);

        // Defined fallback instead of a division fault
        assert!(shares.iter().all(|s| s.percentage == 0.0));
        assert_eq!(shares.len(), 2);
    }

    #[test]
    fn test_distribution_empty_result() {
        let item = leaf("empty", ResultMap::new());
        assert!(distribution(&item).is_empty());
    }
}
