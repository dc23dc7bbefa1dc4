//! Top-level checker configuration

use crate::compare::CompareConfig;

/// Loading and comparison options shared by the library and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerConfig {
    /// Files larger than this many bytes are rejected before reading
    pub max_file_size: u64,
    /// Stop loading a batch at the first source that fails
    pub fail_fast: bool,
    pub compare: CompareConfig,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
            fail_fast: false,
            compare: CompareConfig::default(),
        }
    }
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_file_size(mut self, limit_bytes: u64) -> Self {
        self.max_file_size = limit_bytes;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_compare(mut self, compare: CompareConfig) -> Self {
        self.compare = compare;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_size < 2 {
            return Err("Max file size must be at least 2 bytes".to_string());
        }

        self.compare.validate()
    }
}
