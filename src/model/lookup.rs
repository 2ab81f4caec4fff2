//! Item lookup by stable key.
//!
//! Two deliberately different contracts live here:
//! - `find_child` checks direct children only. Navigation resolves one
//!   URL path segment at a time, so a grandchild must never match.
//! - `find_in_forest` searches whole subtrees. Trend reconstruction
//!   matches an item across historical snapshots where its nesting
//!   depth may have changed.
//!
//! A miss is a normal outcome in both cases, reported as `None` and
//! never as an error.

use super::schema::Item;

/// Locate a direct child of `parent` whose stable key (its id) equals `key`.
///
/// **Public** - navigation entry point for drill-down
pub fn find_child<'a>(parent: &'a Item, key: &str) -> Option<&'a Item> {
    parent.items.iter().find(|child| child.id == key)
}

/// Locate an item anywhere in the forest by stable key, depth-first.
///
/// **Public** - used by the series builder to match items across snapshots
pub fn find_in_forest<'a>(items: &'a [Item], key: &str) -> Option<&'a Item> {
    for item in items {
        if item.id == key {
            return Some(item);
        }
        if let Some(found) = find_in_forest(&item.items, key) {
            return Some(found);
        }
    }
    None
}
