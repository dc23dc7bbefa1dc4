//! Comparison engine
//!
//! Discovers field paths across documents, extracts the value at each path,
//! and decides whether every document agrees. All functions here are pure.

pub mod canonical;
pub mod config;
pub mod extract;
pub mod field;
pub mod paths;

pub use canonical::{canonical_form, canonical_value, ABSENT_TOKEN};
pub use config::{CompareConfig, KeyOrder};
pub use extract::{value_at_path, Extracted};
pub use field::{compare_field, compare_field_with, ComparisonResult, DocumentValue};
pub use paths::{enumerate_paths, enumerate_paths_with, get_all_fields, get_all_fields_with};
