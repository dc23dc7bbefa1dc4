//! Field path discovery across heterogeneous JSON documents
//!
//! Paths are dot-joined object keys. Arrays are transparent: an array whose
//! first element is an object contributes that element's paths under the
//! array's own prefix, any other array is a leaf.

use crate::compare::config::CompareConfig;
use crate::document::Document;
use serde_json::Value;
use std::collections::BTreeSet;

/// Enumerate every field path reachable in `value`, rooted at `prefix`
pub fn enumerate_paths(value: &Value, prefix: &str) -> BTreeSet<String> {
    enumerate_paths_with(value, prefix, &CompareConfig::default())
}

/// Enumerate field paths, treating anything nested beyond `config.max_depth` as a leaf
pub fn enumerate_paths_with(
    value: &Value,
    prefix: &str,
    config: &CompareConfig,
) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect_paths(value, prefix, 0, config.max_depth, &mut paths);
    paths
}

fn collect_paths(
    value: &Value,
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
    paths: &mut BTreeSet<String>,
) {
    if max_depth.is_some_and(|max| depth >= max) {
        paths.insert(prefix.to_string());
        return;
    }

    match value {
        Value::Array(items) => match array_template(items) {
            Some(template) => collect_paths(template, prefix, depth + 1, max_depth, paths),
            None => {
                paths.insert(prefix.to_string());
            }
        },
        Value::Object(map) => {
            // An empty object has no keys to report, but the document must
            // still contribute a path.
            if map.is_empty() {
                paths.insert(prefix.to_string());
                return;
            }

            for (key, child) in map {
                let child_prefix = join_path(prefix, key);
                if is_branch(child) {
                    collect_paths(child, &child_prefix, depth + 1, max_depth, paths);
                } else {
                    paths.insert(child_prefix);
                }
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            paths.insert(prefix.to_string());
        }
    }
}

/// First element of an array, when it is an object that can act as a template
fn array_template(items: &[Value]) -> Option<&Value> {
    items.first().filter(|first| first.is_object())
}

/// Whether a child value is descended into rather than reported as a leaf
fn is_branch(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => array_template(items).is_some(),
        _ => false,
    }
}

/// Append `key` to `prefix` with a dot separator
pub fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Sorted, deduplicated union of the paths of every document
pub fn get_all_fields(documents: &[Document]) -> Vec<String> {
    get_all_fields_with(documents, &CompareConfig::default())
}

pub fn get_all_fields_with(documents: &[Document], config: &CompareConfig) -> Vec<String> {
    let mut fields = BTreeSet::new();
    for document in documents {
        fields.extend(enumerate_paths_with(&document.data, "", config));
    }
    fields.into_iter().collect()
}
