//! Comparison reports
//!
//! A [`Report`] snapshots a session: every discovered field with its ignored
//! flag, the comparison of each active field, the loaded documents and the
//! run summary. It renders as human-readable text or as JSON.

pub mod summary;
pub mod text;

pub use summary::ComparisonSummary;
pub use text::ReportFormatter;

use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use crate::compare::ComparisonResult;
use crate::document::{DocumentId, FieldEntry, LoadFailure, Session};
use crate::error::{CheckerError, CheckerResult};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What a rendered report includes
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Only list fields that disagree in the comparison section
    pub only_inconsistent: bool,
    /// List the loaded documents
    pub show_documents: bool,
    /// Include each document's pretty-printed JSON in the listing
    pub expand_documents: bool,
    /// Use terminal colors in text output
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            only_inconsistent: false,
            show_documents: false,
            expand_documents: false,
            color: false,
        }
    }
}

/// One loaded document as listed in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentEntry {
    /// 1-based position in load order
    pub position: usize,
    pub id: DocumentId,
    pub source_name: Option<String>,
    /// Source name, or the id for pasted input
    pub label: String,
    pub field_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub fields: Vec<FieldEntry>,
    pub comparisons: Vec<ComparisonResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<DocumentEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<LoadFailure>,
    pub summary: ComparisonSummary,
}

impl Report {
    /// Compute fields and comparisons for the session as it stands now
    pub fn build(session: &Session, failures: &[LoadFailure], options: &ReportOptions) -> Self {
        let start_time = Instant::now();
        let fields = session.fields();
        let mut comparisons = session.comparisons();
        let summary = session
            .summarize(&fields, &comparisons, start_time.elapsed())
            .with_failed_source_count(failures.len());

        if options.only_inconsistent {
            comparisons.retain(|c| !c.is_consistent);
        }

        let documents = if options.show_documents {
            session
                .documents()
                .iter()
                .enumerate()
                .map(|(i, doc)| DocumentEntry {
                    position: i + 1,
                    id: doc.id,
                    source_name: doc.source_name.clone(),
                    label: doc.label(),
                    field_count: doc.field_count(),
                    data: options.expand_documents.then(|| doc.data.clone()),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            fields,
            comparisons,
            documents,
            failures: failures.to_vec(),
            summary,
        }
    }

    /// Render in the format selected by `options`
    pub fn render(&self, options: &ReportOptions) -> CheckerResult<String> {
        match options.format {
            OutputFormat::Text => ReportFormatter::new(options.clone()).format(self),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| CheckerError::Other(anyhow::Error::new(e))),
        }
    }
}
