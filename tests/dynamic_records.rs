//! Dynamic Record Tests
//!
//! Member lookup is explicit and fallible, and name-keyed sorting is
//! stable with a fixed cross-type order.

use serde_json::json;
use suifeatures::projection::SortSpec;
use suifeatures::record::{DynamicRecord, DynamicSorter, FieldValue, RecordError};

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_lookup_present_and_absent() {
    let record = DynamicRecord::from_json(&json!({"name": "Alice", "age": 25})).unwrap();

    assert_eq!(record.member("name"), Some(&FieldValue::text("Alice")));
    assert_eq!(record.int("age"), Some(25));
    assert_eq!(record.member("nickname"), None);
    assert_eq!(record.render(&["name", "age"]), "Alice 25");
}

#[test]
fn test_lookup_wrong_type_is_none() {
    let record = DynamicRecord::from_pairs([("age", "twenty")]);

    assert_eq!(record.int("age"), None);
    assert!(matches!(
        record.expect_int("age"),
        Err(RecordError::TypeMismatch { expected: "int", .. })
    ));
}

#[test]
fn test_null_rejected() {
    assert_eq!(
        DynamicRecord::from_json(&json!({"age": null})),
        Err(RecordError::NullValue("age".into()))
    );
}

#[test]
fn test_json_round_trip_keeps_values() {
    let input = json!({"active": true, "name": "Bob", "score": 1.5});
    let record = DynamicRecord::from_json(&input).unwrap();
    assert_eq!(record.to_json(), input);
}

// =============================================================================
// Sorting Tests
// =============================================================================

fn people() -> Vec<DynamicRecord> {
    vec![
        DynamicRecord::new().with("name", "Alice").with("age", 25),
        DynamicRecord::new().with("name", "Bob").with("age", 30),
        DynamicRecord::new().with("name", "Charlie").with("age", 22),
    ]
}

#[test]
fn test_sort_by_age() {
    let records = people();
    let sorted = DynamicSorter::sort(&records, &SortSpec::asc("age"));

    let names: Vec<&str> = sorted.iter().filter_map(|r| r.text("name")).collect();
    assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
    assert_eq!(records, people());
}

#[test]
fn test_sort_in_place_desc() {
    let mut records = people();
    DynamicSorter::sort_in_place(&mut records, &SortSpec::desc("age"));

    let names: Vec<&str> = records.iter().filter_map(|r| r.text("name")).collect();
    assert_eq!(names, vec!["Bob", "Alice", "Charlie"]);
}

#[test]
fn test_int_and_float_interleave() {
    let records = vec![
        DynamicRecord::new().with("id", "a").with("v", 3),
        DynamicRecord::new().with("id", "b").with("v", FieldValue::float(2.5).unwrap()),
        DynamicRecord::new().with("id", "c").with("v", 2),
    ];

    let sorted = DynamicSorter::sort(&records, &SortSpec::asc("v"));

    let ids: Vec<&str> = sorted.iter().filter_map(|r| r.text("id")).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

/// Repeated sorts of the same input give the same output.
#[test]
fn test_sort_deterministic() {
    let records = vec![
        DynamicRecord::new().with("id", "x").with("k", true),
        DynamicRecord::new().with("id", "y"),
        DynamicRecord::new().with("id", "z").with("k", "t"),
        DynamicRecord::new().with("id", "w").with("k", 0),
    ];

    let first = DynamicSorter::sort(&records, &SortSpec::asc("k"));
    for _ in 0..50 {
        assert_eq!(DynamicSorter::sort(&records, &SortSpec::asc("k")), first);
    }

    let ids: Vec<&str> = first.iter().filter_map(|r| r.text("id")).collect();
    assert_eq!(ids, vec!["y", "x", "w", "z"]);
}

/// Ints and floats near 2^53 compare by exact value, not through `f64`.
#[test]
fn test_int_float_exact_near_2_pow_53() {
    let input = json!([
        {"id": "c", "v": 9007199254740993_i64},
        {"id": "f", "v": 9007199254740992.0},
        {"id": "a", "v": 9007199254740992_i64},
    ]);
    let records: Vec<DynamicRecord> = input
        .as_array()
        .unwrap()
        .iter()
        .map(|value| DynamicRecord::from_json(value).unwrap())
        .collect();

    let asc = DynamicSorter::sort(&records, &SortSpec::asc("v"));
    let ids: Vec<&str> = asc.iter().filter_map(|r| r.text("id")).collect();
    assert_eq!(ids, vec!["f", "a", "c"]);

    let desc = DynamicSorter::sort(&records, &SortSpec::desc("v"));
    let ids: Vec<&str> = desc.iter().filter_map(|r| r.text("id")).collect();
    assert_eq!(ids, vec!["c", "f", "a"]);
}
