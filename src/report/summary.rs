//! Summary statistics for a comparison run

use serde::Serialize;
use std::time::Duration;

use crate::compare::ComparisonResult;
use crate::document::FieldEntry;

/// Counts describing one comparison run
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    /// Number of loaded documents
    pub document_count: usize,
    /// Number of distinct field paths discovered
    pub field_count: usize,
    /// Fields not ignored by the user
    pub active_field_count: usize,
    pub ignored_field_count: usize,
    pub consistent_count: usize,
    pub inconsistent_count: usize,
    /// Loading failures reported for the batch
    pub failed_source_count: usize,
    /// Time spent enumerating and comparing
    pub processing_time_ms: u64,
    /// Timestamp of when the summary was collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl ComparisonSummary {
    pub fn collect(
        document_count: usize,
        fields: &[FieldEntry],
        comparisons: &[ComparisonResult],
        processing_time: Duration,
    ) -> Self {
        let ignored_field_count = fields.iter().filter(|f| f.ignored).count();
        let inconsistent_count = comparisons.iter().filter(|c| !c.is_consistent).count();

        Self {
            document_count,
            field_count: fields.len(),
            active_field_count: fields.len() - ignored_field_count,
            ignored_field_count,
            consistent_count: comparisons.len() - inconsistent_count,
            inconsistent_count,
            failed_source_count: 0,
            processing_time_ms: processing_time.as_millis() as u64,
            collected_at: chrono::Utc::now(),
        }
    }

    pub fn with_failed_source_count(mut self, count: usize) -> Self {
        self.failed_source_count = count;
        self
    }

    /// True when every active field agrees across documents
    pub fn all_consistent(&self) -> bool {
        self.inconsistent_count == 0
    }

    /// Share of active fields that agree, as a percentage
    pub fn consistency_rate(&self) -> f32 {
        let compared = self.consistent_count + self.inconsistent_count;
        if compared == 0 {
            return 100.0;
        }
        self.consistent_count as f32 / compared as f32 * 100.0
    }
}
