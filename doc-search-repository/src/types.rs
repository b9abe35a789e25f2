//! Request and response types for search engine operations.

use serde::Deserialize;

/// Identifies one document of a submitted bulk batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Position of the document in the submitted batch.
    pub position: usize,
    /// Title of the document, for reporting.
    pub title: String,
    /// Why the engine rejected it.
    pub reason: String,
}

impl DocumentRef {
    pub fn new(position: usize, title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            reason: reason.into(),
        }
    }
}

/// Outcome of a bulk write.
///
/// A bulk request can be accepted as a whole while the engine still rejects
/// some of the documents in it; those are listed in `failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkWriteSummary {
    /// Number of documents the engine confirmed.
    pub succeeded: usize,
    /// Documents the engine rejected.
    pub failed: Vec<DocumentRef>,
}

impl BulkWriteSummary {
    /// Summary for a batch where every document was confirmed.
    pub fn all_succeeded(count: usize) -> Self {
        Self {
            succeeded: count,
            failed: Vec::new(),
        }
    }

    /// Total number of documents in the batch.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    /// Whether no document was rejected.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The `_source` of a search hit, restricted to the fields the query asks for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub content: String,
}
