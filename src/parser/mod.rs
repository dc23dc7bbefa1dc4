//! JSON input parsing
//!
//! Turns raw text from a file, standard input, or a pasted string into a
//! `serde_json::Value`. Failures carry the parser message and, for files,
//! the file name so the caller can report them per source.

pub mod directory;
pub mod filter;
pub mod limits;

use crate::error::{ParseError, ParseResult};
use std::io::Read;
use std::path::PathBuf;

/// Source of a single JSON document
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    /// Raw JSON text, e.g. pasted by the user
    String(String),
    /// JSON file path
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        let result = match self {
            JsonSource::String(content) => parse_from_string(content),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin(),
        };

        match self.source_name() {
            Some(name) => result.map_err(|e| e.with_source_name(name)),
            None => result,
        }
    }

    /// Name shown next to the document and in its parse errors
    pub fn source_name(&self) -> Option<String> {
        match self {
            JsonSource::String(_) => None,
            JsonSource::File(path) => Some(
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            ),
            JsonSource::Stdin => Some("<stdin>".to_string()),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Size of the source in bytes, if known before reading it
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::String(s) => Some(s.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            JsonSource::Stdin => None,
        }
    }
}

/// Parse JSON from a string
pub fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON input".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        let location = (e.line() > 0).then(|| (e.line(), e.column()));
        ParseError::new(e.to_string(), location)
    })
}

/// Parse JSON from a file
fn parse_from_file(path: &PathBuf) -> ParseResult<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ParseError::new(format!("Failed to read file: {}", e), None))?;

    parse_from_string(&content)
}

/// Parse JSON from standard input
fn parse_from_stdin() -> ParseResult<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("Failed to read stdin: {}", e), None))?;

    parse_from_string(&buffer)
}
