use serde::Serialize;

use crate::document::{CheckerConfig, DocumentId, DocumentSet};
use crate::error::CheckerResult;
use crate::parser::JsonSource;

/// A source that could not be loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadFailure {
    pub source: String,
    pub message: String,
}

/// Outcome of loading several sources in one go
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub loaded: Vec<DocumentId>,
    pub failures: Vec<LoadFailure>,
}

impl BatchOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl DocumentSet {
    /// Load every source in order. A failing source is recorded and the rest
    /// still load, unless `config.fail_fast` is set.
    pub fn load_batch(
        &mut self,
        sources: &[JsonSource],
        config: &CheckerConfig,
    ) -> CheckerResult<BatchOutcome> {
        let mut outcome = BatchOutcome::default();

        for source in sources {
            match self.load(source, config.max_file_size) {
                Ok(id) => outcome.loaded.push(id),
                Err(e) => {
                    if config.fail_fast {
                        return Err(e);
                    }
                    tracing::debug!(source = %source.description(), "failed to load: {}", e.user_message());
                    outcome.failures.push(LoadFailure {
                        source: source
                            .source_name()
                            .unwrap_or_else(|| source.description()),
                        message: e.user_message(),
                    });
                }
            }
        }

        tracing::info!(
            loaded = outcome.loaded.len(),
            failed = outcome.failures.len(),
            "batch loaded"
        );
        Ok(outcome)
    }
}
