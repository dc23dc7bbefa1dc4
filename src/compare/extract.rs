//! Value extraction at a field path
//!
//! Extraction never fails: missing keys and type mismatches come back as
//! [`Extracted::Absent`]. Walking into an array fans the remaining path out
//! over every element, one level of nesting per array encountered.

use serde::Serialize;
use serde_json::Value;

/// Outcome of walking a field path through one document
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<'a> {
    /// The path does not exist in the document
    Absent,
    /// A single value found at the path
    Value(&'a Value),
    /// One result per element of an array crossed by the path
    FanOut(Vec<Extracted<'a>>),
}

impl<'a> Extracted<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Extracted::Absent)
    }

    /// Owned JSON rendition; absent entries become `null`
    pub fn to_json(&self) -> Value {
        match self {
            Extracted::Absent => Value::Null,
            Extracted::Value(value) => (*value).clone(),
            Extracted::FanOut(items) => Value::Array(items.iter().map(Extracted::to_json).collect()),
        }
    }
}

impl Serialize for Extracted<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Extracted::Absent => serializer.serialize_none(),
            Extracted::Value(value) => value.serialize(serializer),
            Extracted::FanOut(items) => items.serialize(serializer),
        }
    }
}

/// Extract the value at a dot-delimited `path`. The empty path addresses the root.
pub fn value_at_path<'a>(value: &'a Value, path: &str) -> Extracted<'a> {
    if path.is_empty() {
        return Extracted::Value(value);
    }

    let keys: Vec<&str> = path.split('.').collect();
    walk(value, &keys)
}

fn walk<'a>(current: &'a Value, keys: &[&str]) -> Extracted<'a> {
    let Some((key, rest)) = keys.split_first() else {
        return Extracted::Value(current);
    };

    match current {
        Value::Null => Extracted::Absent,
        Value::Array(items) => Extracted::FanOut(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(_) => walk(item, keys),
                    _ => Extracted::Absent,
                })
                .collect(),
        ),
        Value::Object(map) => match map.get(*key) {
            Some(child) => walk(child, rest),
            None => Extracted::Absent,
        },
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Extracted::Absent,
    }
}
