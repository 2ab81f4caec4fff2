//! Per-key summation of result maps.
//!
//! This is the "roll up one level" operation: a parent's displayed
//! distribution is the sum, grouped by key, of its direct children's
//! result maps. It does not recurse - producers pre-aggregate parent
//! sums at ingestion, and callers that want deeper roll-ups compose
//! `aggregate` themselves.

use crate::model::schema::{Item, ResultMap};
use log::debug;

/// Sum the direct result maps of `items`, grouped by key.
///
/// **Public** - main aggregation entry point
///
/// Key order in the output is first-seen order across the sequence,
/// so the result is deterministic for a given input order. Inputs are
/// not mutated; running twice yields identical output.
///
/// Edge cases: an empty slice yields an empty map. Negative values are
/// never produced here but are carried through unchanged if an
/// unvalidated input contains them.
pub fn aggregate(items: &[Item]) -> ResultMap {
    debug!("Aggregating result maps of {} items", items.len());

    let mut totals = ResultMap::new();

    for item in items {
        for (key, value) in item.result.iter() {
            match totals.get_mut(key) {
                Some(sum) => *sum += value,
                None => {
                    totals.insert(key, *value);
                }
            }
        }
    }

    totals
}

/// Sum of all values in an item's own result map.
///
/// Thin alias over `Item::total`, kept so the aggregation surface is
/// complete in one module.
pub fn total_of(item: &Item) -> i64 {
    item.total()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, result: ResultMap) -> Item {
        Item {
            id: id.to_string(),
            name: String::new(),
            result,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_aggregate_sums_per_key() {
        let items = vec![
            leaf("i1", ResultMap::from([("A", 2)])),
            leaf("i2", ResultMap::from([("A", 3), ("B", 1)])),
        ];

        let totals = aggregate(&items);

        assert_eq!(totals.get("A"), Some(&5));
        assert_eq!(totals.get("B"), Some(&1));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_aggregate_empty_input() {
        let totals = aggregate(&[]);
        assert!(totals.is_empty());
    }

    #[test]
    fn test_aggregate_first_seen_key_order() {
        let items = vec![
            leaf("i1", ResultMap::from([("FAILED", 1)])),
            leaf("i2", ResultMap::from([("PASSED", 4), ("FAILED", 2)])),
            leaf("i3", ResultMap::from([("SKIPPED", 1)])),
        ];

        let totals = aggregate(&items);
        let keys: Vec<&str> = totals.keys().collect();
        assert_eq!(keys, vec!["FAILED", "PASSED", "SKIPPED"]);
    }

    #[test]
    fn test_aggregate_does_not_recurse() {
        let mut parent = leaf("parent", ResultMap::from([("A", 1)]));
        parent.items.push(leaf("child", ResultMap::from([("A", 100)])));

        let totals = aggregate(std::slice::from_ref(&parent));

        // Only the parent's own map counts; grandchildren are not visited
        assert_eq!(totals.get("A"), Some(&1));
    }

    #[test]
    fn test_aggregate_is_idempotent_over_input() {
        let items = vec![
            leaf("i1", ResultMap::from([("A", 2), ("B", 7)])),
            leaf("i2", ResultMap::from([("B", 3)])),
        ];

        let first = aggregate(&items);
        let second = aggregate(&items);
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_preserves_negative_input() {
        // Defensive: unvalidated data flows through unsanitized
        let items = vec![
            leaf("i1", ResultMap::from([("A", -2)])),
            leaf("i2", ResultMap::from([("A", 5)])),
        ];

        assert_eq!(aggregate(&items).get("A"), Some(&3));
    }

    #[test]
    fn test_total_of_matches_value_sum() {
        let item = leaf("x", ResultMap::from([("A", 1), ("B", 2), ("C", 3)]));
        assert_eq!(total_of(&item), 6);
    }
}
