//! Error types and handling infrastructure for loading and comparing balance files

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Core error kinds raised while loading documents or configuring a comparison
#[derive(Debug, thiserror::Error)]
pub enum CheckerErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("File too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Input not found: {input}")]
    InputNotFound { input: String },
}

impl CheckerErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for checker operations
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Checker {
        kind: CheckerErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl CheckerError {
    pub fn checker(kind: CheckerErrorKind) -> Self {
        Self::Checker { kind, source: None }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => err.to_string(),
            Self::Checker { kind, .. } => match kind {
                CheckerErrorKind::FileTooLarge { size, limit } => {
                    format!("File too large: {} bytes (limit: {} bytes)", size, limit)
                }
                CheckerErrorKind::Io {
                    message,
                    path: Some(path),
                } => format!("{}: {}", path.display(), message),
                _ => self.to_string(),
            },
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

/// JSON parsing errors, keyed by the source they came from when known
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub source_name: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            source_name: None,
        }
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source_name {
            Some(name) => write!(f, "Error parsing {}: {}", name, self.message),
            None => write!(f, "Invalid JSON: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type for checker operations
pub type CheckerResult<T> = Result<T, CheckerError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
