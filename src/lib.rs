//! Balance Checker
//!
//! Load several JSON documents ("balance files") and find the fields that
//! disagree across them. Field paths are discovered from every document,
//! then each path is extracted from all documents and compared by
//! canonical form.

pub mod cli;
pub mod compare;
pub mod document;
pub mod error;
pub mod parser;
pub mod report;

// Re-export commonly used types
pub use compare::{
    compare_field, enumerate_paths, get_all_fields, value_at_path, CompareConfig,
    ComparisonResult, Extracted,
};
pub use document::{CheckerConfig, Document, DocumentId, DocumentSet, IgnoredPaths, Session};
pub use error::{CheckerError, CheckerErrorKind, ParseError};
pub use parser::JsonSource;
pub use report::{Report, ReportOptions};

/// Parse JSON text and compare one field path across the resulting documents
pub fn compare_json_texts(texts: &[&str], path: &str) -> Result<ComparisonResult, CheckerError> {
    let mut documents = DocumentSet::new();
    for text in texts {
        documents.add_text(text, None)?;
    }
    Ok(compare_field(documents.as_slice(), path))
}
