use std::collections::BTreeSet;

/// Field paths the user has chosen not to compare.
/// Only filters which comparisons run; path discovery is unaffected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoredPaths {
    paths: BTreeSet<String>,
}

impl IgnoredPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the ignored state of `path`, returning the new state
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.paths.remove(path) {
            false
        } else {
            self.paths.insert(path.to_string());
            true
        }
    }

    pub fn ignore(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    pub fn unignore(&mut self, path: &str) -> bool {
        self.paths.remove(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoredPaths {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}
