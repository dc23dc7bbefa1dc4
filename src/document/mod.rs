//! Loaded documents and the caller-owned state around them

pub mod batch;
pub mod config;
pub mod ignored;
pub mod session;

pub use batch::{BatchOutcome, LoadFailure};
pub use config::CheckerConfig;
pub use ignored::IgnoredPaths;
pub use session::{FieldEntry, Session};

use crate::error::CheckerResult;
use crate::parser::{parse_from_string, JsonSource};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Identifier of a loaded document, unique within its [`DocumentSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocumentId(u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A parsed JSON document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub data: Value,
    pub source_name: Option<String>,
}

impl Document {
    /// Number of top-level entries: keys of an object, elements of an array, 0 otherwise
    pub fn field_count(&self) -> usize {
        match &self.data {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Label used in listings: the source name, or the id for pasted input
    pub fn label(&self) -> String {
        match &self.source_name {
            Some(name) => name.clone(),
            None => format!("document {}", self.id),
        }
    }
}

/// Ordered collection of loaded documents
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    documents: Vec<Document>,
    next_id: u64,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-parsed document and return its fresh id
    pub fn add(&mut self, data: Value, source_name: Option<String>) -> DocumentId {
        self.next_id += 1;
        let id = DocumentId(self.next_id);
        tracing::debug!(%id, source = source_name.as_deref().unwrap_or("<input>"), "document added");
        self.documents.push(Document {
            id,
            data,
            source_name,
        });
        id
    }

    /// Parse raw JSON text and append it
    pub fn add_text(&mut self, text: &str, source_name: Option<String>) -> CheckerResult<DocumentId> {
        let data = match &source_name {
            Some(name) => parse_from_string(text).map_err(|e| e.with_source_name(name.clone()))?,
            None => parse_from_string(text)?,
        };
        Ok(self.add(data, source_name))
    }

    /// Read, parse and append one source, enforcing the file size limit
    pub fn load(&mut self, source: &JsonSource, max_file_size: u64) -> CheckerResult<DocumentId> {
        crate::parser::limits::check_source_size(source, max_file_size)?;
        let data = source.parse()?;
        Ok(self.add(data, source.source_name()))
    }

    pub fn remove(&mut self, id: DocumentId) -> Option<Document> {
        let position = self.documents.iter().position(|d| d.id == id)?;
        tracing::debug!(%id, "document removed");
        Some(self.documents.remove(position))
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn as_slice(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Remove every document. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.documents.clear();
    }
}
