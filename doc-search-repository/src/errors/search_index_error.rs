//! Search index error types.
//!
//! This module defines the errors surfaced by the schema manager, the
//! ingestion pipeline and the query service.

use thiserror::Error;

use crate::types::DocumentRef;

/// Errors that can occur during search index operations.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Bad input, rejected before anything is sent to the engine.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The index could not be checked or created.
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// A bulk write failed, completely or for some documents.
    #[error("Ingestion error ({unconfirmed} documents not confirmed): {message}")]
    IngestionError {
        message: String,
        /// Number of submitted documents the engine did not confirm.
        unconfirmed: usize,
        /// Documents the engine rejected individually, if it reported them.
        failed: Vec<DocumentRef>,
    },

    /// The query could not be executed or its response was malformed.
    #[error("Search error: {0}")]
    SearchError(String),
}

impl SearchIndexError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaError(msg.into())
    }

    /// Create an ingestion error for a bulk request that failed as a whole.
    pub fn ingestion(msg: impl Into<String>, unconfirmed: usize) -> Self {
        Self::IngestionError {
            message: msg.into(),
            unconfirmed,
            failed: Vec::new(),
        }
    }

    /// Create an ingestion error for documents rejected inside a bulk request.
    pub fn partial_ingestion(failed: Vec<DocumentRef>) -> Self {
        Self::IngestionError {
            message: format!("{} documents were rejected by the engine", failed.len()),
            unconfirmed: failed.len(),
            failed,
        }
    }

    /// Create a search error.
    pub fn search(msg: impl Into<String>) -> Self {
        Self::SearchError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ingestion_counts_failed_documents() {
        let failed = vec![
            DocumentRef::new(0, "First", "mapper_parsing_exception"),
            DocumentRef::new(3, "Fourth", "mapper_parsing_exception"),
        ];

        match SearchIndexError::partial_ingestion(failed) {
            SearchIndexError::IngestionError {
                unconfirmed,
                failed,
                ..
            } => {
                assert_eq!(unconfirmed, 2);
                assert_eq!(failed[1].position, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ingestion_error_message() {
        let err = SearchIndexError::ingestion("connection refused", 5);
        assert_eq!(
            err.to_string(),
            "Ingestion error (5 documents not confirmed): connection refused"
        );
    }
}
