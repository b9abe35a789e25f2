//! Search index client implementation.
//!
//! Bundles the schema manager, ingestion pipeline and query service around a
//! single engine handle and index configuration. Application code uses this
//! to prepare the index, ingest documents and run queries.

use std::sync::Arc;

use crate::config::SearchIndexConfig;
use crate::errors::{EngineError, SearchIndexError};
use crate::interfaces::SearchEngineClient;
use crate::services::{IngestionPipeline, QueryService, SchemaManager};
use crate::types::BulkWriteSummary;
use doc_search_shared::{Document, SearchQuery, SearchResult};

/// The main client for interacting with the document index.
pub struct SearchIndexClient {
    engine: Arc<dyn SearchEngineClient>,
    config: SearchIndexConfig,
    schema: SchemaManager,
    ingestion: IngestionPipeline,
    queries: QueryService,
}

impl SearchIndexClient {
    /// Create a new SearchIndexClient with default configuration.
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self::with_config(engine, SearchIndexConfig::default())
    }

    /// Create a new SearchIndexClient with custom configuration.
    pub fn with_config(engine: Arc<dyn SearchEngineClient>, config: SearchIndexConfig) -> Self {
        Self {
            schema: SchemaManager::new(engine.clone()),
            ingestion: IngestionPipeline::new(engine.clone(), config.clone()),
            queries: QueryService::new(engine.clone(), config.clone()),
            engine,
            config,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &SearchIndexConfig {
        &self.config
    }

    /// Ensure the configured index exists.
    pub async fn ensure_index(&self) -> Result<(), SearchIndexError> {
        self.schema.ensure_index(&self.config.index_name).await
    }

    /// Ingest documents into the configured index.
    /// Output: number of documents confirmed by the engine
    pub async fn ingest(&self, documents: &[Document]) -> Result<usize, SearchIndexError> {
        self.ingestion.ingest(documents).await
    }

    /// Ingest documents and report per-document rejections.
    pub async fn ingest_detailed(
        &self,
        documents: &[Document],
    ) -> Result<BulkWriteSummary, SearchIndexError> {
        self.ingestion.ingest_detailed(documents).await
    }

    /// Query the configured index.
    /// Output: results ordered by relevance
    pub async fn search(
        &self,
        text: &str,
        content_type: Option<&str>,
    ) -> Result<Vec<SearchResult>, SearchIndexError> {
        self.queries.search(text, content_type).await
    }

    /// Query the configured index with a prepared query.
    pub async fn query(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchIndexError> {
        self.queries.execute(query).await
    }

    /// Check that the engine is reachable and healthy.
    pub async fn health_check(&self) -> Result<bool, EngineError> {
        self.engine.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemorySearchEngine;
    use crate::config::DEFAULT_INDEX_NAME;
    use doc_search_shared::ContentType;

    #[tokio::test]
    async fn test_default_config_targets_default_index() {
        let engine = Arc::new(InMemorySearchEngine::new());
        let client = SearchIndexClient::new(engine.clone());

        client.ensure_index().await.unwrap();

        assert_eq!(client.config().index_name, DEFAULT_INDEX_NAME);
        assert!(engine.index_exists(DEFAULT_INDEX_NAME).await.unwrap());
    }

    #[tokio::test]
    async fn test_ingest_then_query() {
        let engine = Arc::new(InMemorySearchEngine::new());
        let client = SearchIndexClient::with_config(engine, SearchIndexConfig::new("docs"));
        client.ensure_index().await.unwrap();

        let inserted = client
            .ingest(&[
                Document::new("Rust tutorial", "ownership", ContentType::Tutorial),
                Document::new("Rust news", "release", ContentType::News),
            ])
            .await
            .unwrap();
        assert_eq!(inserted, 2);

        let results = client
            .query(&SearchQuery::new("rust").with_content_type("tutorial"))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Rust tutorial");
        assert_eq!(results[0].snippet, "ownership...");
    }

    #[tokio::test]
    async fn test_health_check() {
        let client = SearchIndexClient::new(Arc::new(InMemorySearchEngine::new()));
        assert!(client.health_check().await.unwrap());
    }
}
