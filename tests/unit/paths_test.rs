use balance_checker::compare::{enumerate_paths, get_all_fields, value_at_path};
use balance_checker::DocumentSet;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_enumeration_is_never_empty() {
    let samples = vec![
        json!(null),
        json!(true),
        json!(1.5),
        json!("s"),
        json!([]),
        json!([1, 2]),
        json!([[1]]),
        json!({}),
        json!({"a": []}),
        json!([{}]),
    ];

    for sample in samples {
        assert!(!enumerate_paths(&sample, "").is_empty(), "no paths for {}", sample);
    }
}

#[test]
fn test_scalar_documents() {
    assert_eq!(enumerate_paths(&json!(42), ""), set(&[""]));
    assert_eq!(enumerate_paths(&Value::Null, ""), set(&[""]));
}

#[test]
fn test_array_template_ignores_later_elements() {
    let value = json!([{"a": 1, "b": 2}, {"a": 3}]);
    assert_eq!(enumerate_paths(&value, ""), set(&["a", "b"]));

    let value = json!({"rows": [{"a": 1}, {"z": {"deep": 1}}]});
    assert_eq!(enumerate_paths(&value, ""), set(&["rows.a"]));
}

#[test]
fn test_nesting() {
    let value = json!({"x": {"y": {"z": 1}}});
    assert_eq!(enumerate_paths(&value, ""), set(&["x.y.z"]));
}

#[test]
fn test_every_enumerated_path_extracts_something() {
    let value = json!({
        "account": {"id": 1, "tags": ["a"]},
        "entries": [{"amount": 1, "meta": {"ok": true}}],
        "none": null
    });

    for path in enumerate_paths(&value, "") {
        assert!(!value_at_path(&value, &path).is_absent(), "{} is absent", path);
    }
}

#[test]
fn test_get_all_fields_sorted_and_deduplicated() {
    let mut set_a = DocumentSet::new();
    set_a.add(json!({"b": 1, "a": {"y": 1}}), None);
    set_a.add(json!({"a": {"x": 1}, "c": [1, 2]}), None);
    set_a.add(json!({"b": 2}), None);

    let mut set_b = DocumentSet::new();
    set_b.add(json!({"b": 2}), None);
    set_b.add(json!({"a": {"x": 1}, "c": [1, 2]}), None);
    set_b.add(json!({"b": 1, "a": {"y": 1}}), None);

    let fields = get_all_fields(set_a.as_slice());
    assert_eq!(fields, vec!["a.x", "a.y", "b", "c"]);
    assert_eq!(fields, get_all_fields(set_b.as_slice()));
}

#[test]
fn test_get_all_fields_of_nothing() {
    assert!(get_all_fields(&[]).is_empty());
}
