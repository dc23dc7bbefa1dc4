//! Per-field comparison across every loaded document

use crate::compare::canonical::canonical_form;
use crate::compare::config::CompareConfig;
use crate::compare::extract::{value_at_path, Extracted};
use crate::document::{Document, DocumentId};
use serde::Serialize;
use serde_json::Value;

/// Value extracted from one document for the compared path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentValue {
    /// 0-based position of the document in load order
    pub index: usize,
    pub id: DocumentId,
    /// `None` when the path is absent from the document
    pub value: Option<Value>,
    pub canonical: String,
}

/// Result of comparing one field path across all documents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub path: String,
    pub values: Vec<DocumentValue>,
    pub failing_items: Vec<usize>,
    pub is_consistent: bool,
    /// Canonical form of the first document; `None` with fewer than two documents
    pub reference: Option<String>,
}

impl ComparisonResult {
    fn trivial(path: &str) -> Self {
        Self {
            path: path.to_string(),
            values: Vec::new(),
            failing_items: Vec::new(),
            is_consistent: true,
            reference: None,
        }
    }
}

/// Compare `path` across `documents` with the default configuration
pub fn compare_field(documents: &[Document], path: &str) -> ComparisonResult {
    compare_field_with(documents, path, &CompareConfig::default())
}

pub fn compare_field_with(
    documents: &[Document],
    path: &str,
    config: &CompareConfig,
) -> ComparisonResult {
    if documents.len() < 2 {
        return ComparisonResult::trivial(path);
    }

    let values: Vec<DocumentValue> = documents
        .iter()
        .enumerate()
        .map(|(index, document)| {
            let extracted = value_at_path(&document.data, path);
            DocumentValue {
                index,
                id: document.id,
                canonical: canonical_form(&extracted, config),
                value: match extracted {
                    Extracted::Absent => None,
                    other => Some(other.to_json()),
                },
            }
        })
        .collect();

    let reference = values[0].canonical.clone();
    let failing_items: Vec<usize> = values
        .iter()
        .filter(|v| v.canonical != reference)
        .map(|v| v.index)
        .collect();

    ComparisonResult {
        path: path.to_string(),
        is_consistent: failing_items.is_empty(),
        values,
        failing_items,
        reference: Some(reference),
    }
}
