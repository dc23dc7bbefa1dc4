//! Configuration options for path enumeration and field comparison

/// How object keys are ordered when building a canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Keep keys in document order; `{"a":1,"b":2}` and `{"b":2,"a":1}` differ
    #[default]
    Preserve,
    /// Sort keys so that objects compare equal regardless of key order
    Sorted,
}

impl KeyOrder {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "preserve" => Ok(KeyOrder::Preserve),
            "sorted" | "sort" => Ok(KeyOrder::Sorted),
            other => Err(format!(
                "Invalid key order '{}'. Use 'preserve' or 'sorted'",
                other
            )),
        }
    }
}

/// Comparison configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    /// Object key ordering used by canonical forms
    pub key_order: KeyOrder,
    /// Maximum nesting depth explored by path enumeration
    pub max_depth: Option<usize>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            key_order: KeyOrder::Preserve,
            max_depth: Some(1000),
        }
    }
}

impl CompareConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(depth) = self.max_depth {
            if depth == 0 {
                return Err("Max depth must be at least 1".to_string());
            }
        }

        Ok(())
    }
}
