//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, in-memory, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::EngineError;
use crate::types::{BulkWriteSummary, SearchHit};
use doc_search_shared::Document;

/// Abstract interface for search engine operations.
///
/// The schema manager, ingestion pipeline and query service only ever talk to
/// the engine through this trait. Implementations can be swapped for
/// different backends (OpenSearch, in-memory, mocks in tests).
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, EngineError>`; callers translate these into
/// their own error kinds.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Check whether an index with the given name exists.
    async fn index_exists(&self, index: &str) -> Result<bool, EngineError>;

    /// Create an index with the given settings and mappings body.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was created
    /// * `Err(EngineError::IndexAlreadyExists)` - If the index is already present
    /// * `Err(EngineError)` - If creation was rejected or the engine is unreachable
    async fn create_index(&self, index: &str, mappings: &Value) -> Result<(), EngineError>;

    /// Write documents into an index in a single bulk request.
    ///
    /// # Returns
    ///
    /// * `Ok(BulkWriteSummary)` - The request was accepted; individual
    ///   rejections are listed in the summary
    /// * `Err(EngineError)` - The request as a whole failed
    async fn bulk_write(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<BulkWriteSummary, EngineError>;

    /// Run a structured query and return the hits in engine order.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let body = build_search_query(&SearchQuery::new("science"));
    /// let hits = client.query("test_index", &body).await?;
    /// ```
    async fn query(&self, index: &str, body: &Value) -> Result<Vec<SearchHit>, EngineError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the search engine is healthy
    /// * `Ok(false)` - If the search engine is unhealthy
    /// * `Err(EngineError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, EngineError>;
}
