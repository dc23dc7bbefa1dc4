//! Caller-side state: the loaded documents, the ignored paths and the options
//! used to compare them. Results are recomputed from scratch on every call.

use serde::Serialize;
use std::time::{Duration, Instant};

use crate::compare::{compare_field_with, get_all_fields_with, ComparisonResult};
use crate::document::{CheckerConfig, DocumentSet, IgnoredPaths};
use crate::report::ComparisonSummary;

/// A discovered field path and whether the user ignores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub path: String,
    pub ignored: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    documents: DocumentSet,
    ignored: IgnoredPaths,
    config: CheckerConfig,
}

impl Session {
    pub fn new(config: CheckerConfig) -> Self {
        Self {
            documents: DocumentSet::new(),
            ignored: IgnoredPaths::new(),
            config,
        }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut DocumentSet {
        &mut self.documents
    }

    pub fn ignored(&self) -> &IgnoredPaths {
        &self.ignored
    }

    pub fn ignored_mut(&mut self) -> &mut IgnoredPaths {
        &mut self.ignored
    }

    /// Every field path across the loaded documents, sorted, with its ignored flag
    pub fn fields(&self) -> Vec<FieldEntry> {
        get_all_fields_with(self.documents.as_slice(), &self.config.compare)
            .into_iter()
            .map(|path| FieldEntry {
                ignored: self.ignored.contains(&path),
                path,
            })
            .collect()
    }

    pub fn active_fields(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .filter(|field| !field.ignored)
            .map(|field| field.path)
            .collect()
    }

    /// Compare every active field across all loaded documents
    pub fn comparisons(&self) -> Vec<ComparisonResult> {
        let results: Vec<ComparisonResult> = self
            .active_fields()
            .iter()
            .map(|path| compare_field_with(self.documents.as_slice(), path, &self.config.compare))
            .collect();

        tracing::debug!(
            documents = self.documents.len(),
            fields = results.len(),
            inconsistent = results.iter().filter(|r| !r.is_consistent).count(),
            "comparison finished"
        );
        results
    }

    /// Enumerate, compare and count the session as it stands now
    pub fn summary(&self) -> ComparisonSummary {
        let start_time = Instant::now();
        let fields = self.fields();
        let comparisons = self.comparisons();
        self.summarize(&fields, &comparisons, start_time.elapsed())
    }

    /// Count already computed fields and comparisons against this session
    pub fn summarize(
        &self,
        fields: &[FieldEntry],
        comparisons: &[ComparisonResult],
        processing_time: Duration,
    ) -> ComparisonSummary {
        ComparisonSummary::collect(self.documents.len(), fields, comparisons, processing_time)
    }
}
