//! Canonical string forms used as equality keys
//!
//! Two extracted values compare equal iff their canonical forms are
//! identical. The form is compact JSON, so comparison is structural and
//! type-sensitive (`1` and `"1"` differ).

use crate::compare::config::{CompareConfig, KeyOrder};
use crate::compare::extract::Extracted;
use serde_json::{Number, Value};

/// Largest integer an `f64` holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Token for a path that does not exist. No JSON text serializes to it, so
/// an absent field never equals an explicit `null`.
pub const ABSENT_TOKEN: &str = "<absent>";

/// Canonical form of an extraction result
pub fn canonical_form(extracted: &Extracted<'_>, config: &CompareConfig) -> String {
    let mut out = String::new();
    write_extracted(extracted, config.key_order, &mut out);
    out
}

/// Canonical form of a plain JSON value
pub fn canonical_value(value: &Value, config: &CompareConfig) -> String {
    let mut out = String::new();
    write_value(value, config.key_order, &mut out);
    out
}

fn write_extracted(extracted: &Extracted<'_>, key_order: KeyOrder, out: &mut String) {
    match extracted {
        Extracted::Absent => out.push_str(ABSENT_TOKEN),
        Extracted::Value(value) => write_value(value, key_order, out),
        Extracted::FanOut(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_extracted(item, key_order, out);
            }
            out.push(']');
        }
    }
}

fn write_value(value: &Value, key_order: KeyOrder, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, key_order, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            if key_order == KeyOrder::Sorted {
                entries.sort_by(|a, b| a.0.cmp(b.0));
            }

            out.push('{');
            for (i, (key, child)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::from(key.as_str()).to_string());
                out.push(':');
                write_value(child, key_order, out);
            }
            out.push('}');
        }
        Value::Number(number) => out.push_str(&canonical_number(number)),
        // Display on scalars is compact JSON with proper string escaping
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Render a number by value: integral floats print as integers and `-0`
/// prints as `0`, so `100`, `100.0` and `1e2` share one form.
fn canonical_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }

    match number.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => {
            format!("{}", f as i64)
        }
        _ => number.to_string(),
    }
}
