use balance_checker::compare::{
    compare_field, compare_field_with, value_at_path, CompareConfig, KeyOrder,
};
use balance_checker::{compare_json_texts, DocumentSet};
use serde_json::{json, Value};

fn documents(values: &[Value]) -> DocumentSet {
    let mut set = DocumentSet::new();
    for value in values {
        set.add(value.clone(), None);
    }
    set
}

#[test]
fn test_trivial_consistency() {
    assert!(compare_field(&[], "anything").is_consistent);

    let one = documents(&[json!({"bal": 1})]);
    assert!(compare_field(one.as_slice(), "anything").is_consistent);
}

#[test]
fn test_disagreement_detection() {
    let docs = documents(&[json!({"bal": 10}), json!({"bal": 10}), json!({"bal": 20})]);
    let result = compare_field(docs.as_slice(), "bal");
    assert!(!result.is_consistent);
    assert_eq!(result.failing_items, vec![2]);
}

#[test]
fn test_array_fan_out_extraction() {
    let doc = json!({"items": [{"v": 1}, {"v": 2}]});
    assert_eq!(value_at_path(&doc, "items.v").to_json(), json!([1, 2]));
}

#[test]
fn test_type_sensitivity() {
    let docs = documents(&[json!({"v": 1}), json!({"v": "1"})]);
    assert!(!compare_field(docs.as_slice(), "v").is_consistent);

    let docs = documents(&[json!({"v": 1}), json!({"v": 1.0})]);
    assert!(compare_field(docs.as_slice(), "v").is_consistent);
}

#[test]
fn test_equal_numbers_written_differently_are_consistent() {
    for (left, right) in [
        (r#"{"bal": 100}"#, r#"{"bal": 100.0}"#),
        (r#"{"bal": 100}"#, r#"{"bal": 1e2}"#),
        (r#"{"bal": 0}"#, r#"{"bal": -0}"#),
    ] {
        let result = compare_json_texts(&[left, right], "bal").unwrap();
        assert!(result.is_consistent, "{} vs {}: {:?}", left, right, result.values);
        assert_eq!(result.values[0].canonical, result.values[1].canonical);
    }

    let result = compare_json_texts(&[r#"{"bal": 100}"#, r#"{"bal": 100.5}"#], "bal").unwrap();
    assert!(!result.is_consistent);
}

#[test]
fn test_consistent_values_carry_reference() {
    let docs = documents(&[json!({"o": {"a": [1, 2]}}), json!({"o": {"a": [1, 2]}})]);
    let result = compare_field(docs.as_slice(), "o.a");
    assert!(result.is_consistent);
    assert_eq!(result.reference.as_deref(), Some("[1,2]"));
    assert!(result.values.iter().all(|v| v.canonical == "[1,2]"));
}

#[test]
fn test_values_keep_load_order_and_ids() {
    let docs = documents(&[json!({"v": 3}), json!({"v": 2}), json!({"v": 1})]);
    let result = compare_field(docs.as_slice(), "v");
    let ids: Vec<_> = docs.iter().map(|d| d.id).collect();

    assert_eq!(result.values.iter().map(|v| v.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(result.values.iter().map(|v| v.id).collect::<Vec<_>>(), ids);
    assert_eq!(result.failing_items, vec![1, 2]);
}

#[test]
fn test_partial_fan_out_differs_from_full() {
    let docs = documents(&[
        json!({"rows": [{"v": 1}, {"v": null}]}),
        json!({"rows": [{"v": 1}, {}]}),
    ]);
    let result = compare_field(docs.as_slice(), "rows.v");
    assert!(!result.is_consistent);
    assert_eq!(result.values[0].canonical, "[1,null]");
    assert_eq!(result.values[1].canonical, "[1,<absent>]");
}

#[test]
fn test_key_order_configuration() {
    let docs = documents(&[json!({"o": {"a": 1, "b": 2}}), json!({"o": {"b": 2, "a": 1}})]);
    assert!(!compare_field(docs.as_slice(), "o").is_consistent);

    let config = CompareConfig::default().with_key_order(KeyOrder::Sorted);
    assert!(compare_field_with(docs.as_slice(), "o", &config).is_consistent);
}

#[test]
fn test_scalar_documents_compare_at_root() {
    let result = compare_json_texts(&["42", "43"], "").unwrap();
    assert!(!result.is_consistent);
    assert_eq!(result.reference.as_deref(), Some("42"));
}

#[test]
fn test_compare_json_texts_rejects_invalid_text() {
    let err = compare_json_texts(&[r#"{"a": 1}"#, "{a: 1}"], "a").unwrap_err();
    assert!(err.user_message().starts_with("Invalid JSON: "));
}
