use nested_report_studio::aggregator::{aggregate, distribution, total_of};
use nested_report_studio::model::lookup::find_child;
use nested_report_studio::model::schema::{ColorMap, Item, Report, ResultMap};
use pretty_assertions::assert_eq;

fn item(id: &str, result: ResultMap, children: Vec<Item>) -> Item {
    Item {
        id: id.to_string(),
        name: format!("Item {id}"),
        result,
        items: children,
    }
}

#[test]
fn test_total_of_equals_value_sum() {
    let leaf = item("api", ResultMap::from([("PASSED", 12), ("FAILED", 3), ("SKIPPED", 0)]), vec![]);
    assert_eq!(total_of(&leaf), 15);
}

#[test]
fn test_aggregate_reference_example() {
    let items = vec![
        item("i1", ResultMap::from([("A", 2)]), vec![]),
        item("i2", ResultMap::from([("A", 3), ("B", 1)]), vec![]),
    ];

    let totals = aggregate(&items);

    assert_eq!(totals.get("A"), Some(&5));
    assert_eq!(totals.get("B"), Some(&1));
}

#[test]
fn test_aggregate_empty_is_empty_not_error() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn test_find_child_ignores_grandchildren() {
    let grandchild = item("leaf", ResultMap::new(), vec![]);
    let child = item("mid", ResultMap::new(), vec![grandchild]);
    let parent = item("root", ResultMap::new(), vec![child]);

    assert!(find_child(&parent, "mid").is_some());
    assert!(find_child(&parent, "leaf").is_none());
}

#[test]
fn test_report_json_round_trip() {
    let report = Report {
        items: vec![item(
            "suite",
            ResultMap::from([("PASSED", 9), ("FAILED", 1)]),
            vec![
                item("unit", ResultMap::from([("PASSED", 6)]), vec![]),
                item("e2e", ResultMap::from([("PASSED", 3), ("FAILED", 1)]), vec![]),
            ],
        )],
        colors: ColorMap::from([
            ("PASSED", "#A5D6A7".to_string()),
            ("FAILED", "#EF9A9A".to_string()),
        ]),
    };

    let json = serde_json::to_string(&report).unwrap();
    let back: Report = serde_json::from_str(&json).unwrap();

    // Same ids, names, result maps (order included), and child order
    assert_eq!(back, report);
}

#[test]
fn test_zero_total_distribution_is_defined() {
    let idle = item("idle", ResultMap::from([("A", 0), ("B", 0)]), vec![]);

    let shares = distribution(&idle);

    assert_eq!(shares.len(), 2);
    for share in shares {
        assert_eq!(share.percentage, 0.0);
    }
}

#[test]
fn test_aggregate_does_not_mutate_input() {
    let items = vec![
        item("i1", ResultMap::from([("A", 2)]), vec![]),
        item("i2", ResultMap::from([("A", 3)]), vec![]),
    ];
    let before = items.clone();

    let first = aggregate(&items);
    let second = aggregate(&items);

    assert_eq!(first, second);
    assert_eq!(items, before);
}
