//! Ingestion pipeline.
//!
//! Submits a batch of documents to the index as one bulk request.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::config::SearchIndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchEngineClient;
use crate::types::BulkWriteSummary;
use doc_search_shared::Document;

/// Writes documents into the configured index.
///
/// There is no retry and no forced refresh: written documents become
/// searchable on the engine's own refresh cycle, and retry policy belongs to
/// the caller.
pub struct IngestionPipeline {
    client: Arc<dyn SearchEngineClient>,
    config: SearchIndexConfig,
}

impl IngestionPipeline {
    pub fn new(client: Arc<dyn SearchEngineClient>, config: SearchIndexConfig) -> Self {
        Self { client, config }
    }

    /// Ingest a batch of documents.
    ///
    /// # Returns
    ///
    /// * `Ok(count)` - Every document was confirmed; `count` is the batch size
    /// * `Err(SearchIndexError::IngestionError)` - The bulk request failed, or
    ///   the engine rejected some documents; `unconfirmed` holds how many
    pub async fn ingest(&self, documents: &[Document]) -> Result<usize, SearchIndexError> {
        let summary = self.ingest_detailed(documents).await?;
        if summary.is_complete() {
            Ok(summary.succeeded)
        } else {
            Err(SearchIndexError::partial_ingestion(summary.failed))
        }
    }

    /// Ingest a batch of documents and report per-document rejections.
    ///
    /// An empty batch is a no-op that never reaches the engine. Documents the
    /// engine rejects inside an accepted request are listed in the summary
    /// instead of failing the call, so callers can react to partial failure.
    #[instrument(skip(self, documents), fields(index = %self.config.index_name, count = documents.len()))]
    pub async fn ingest_detailed(
        &self,
        documents: &[Document],
    ) -> Result<BulkWriteSummary, SearchIndexError> {
        if documents.is_empty() {
            debug!("Nothing to ingest");
            return Ok(BulkWriteSummary::default());
        }

        let summary = self
            .client
            .bulk_write(&self.config.index_name, documents)
            .await
            .map_err(|e| {
                error!(error = %e, "Bulk write failed");
                SearchIndexError::ingestion(e.to_string(), documents.len())
            })?;

        if summary.is_complete() {
            info!(succeeded = summary.succeeded, "Documents ingested");
        } else {
            warn!(
                succeeded = summary.succeeded,
                failed = summary.failed.len(),
                "Some documents were rejected"
            );
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use crate::services::mock::MockEngine;
    use doc_search_shared::ContentType;

    fn create_test_documents(count: usize) -> Vec<Document> {
        (0..count)
            .map(|i| {
                Document::new(
                    format!("Document {}", i),
                    format!("Body of document {}", i),
                    ContentType::ALL[i % ContentType::ALL.len()],
                )
            })
            .collect()
    }

    async fn pipeline_with(engine: Arc<MockEngine>) -> IngestionPipeline {
        engine
            .create_index("docs", &serde_json::json!({}))
            .await
            .unwrap();
        IngestionPipeline::new(engine, SearchIndexConfig::new("docs"))
    }

    #[tokio::test]
    async fn test_ingest_empty_is_noop() {
        let engine = Arc::new(MockEngine::new());
        let pipeline = pipeline_with(engine.clone()).await;

        let count = pipeline.ingest(&[]).await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(MockEngine::count(&engine.bulk_calls), 0);
    }

    #[tokio::test]
    async fn test_ingest_returns_batch_size_in_one_request() {
        let engine = Arc::new(MockEngine::new());
        let pipeline = pipeline_with(engine.clone()).await;

        let count = pipeline.ingest(&create_test_documents(5)).await.unwrap();

        assert_eq!(count, 5);
        assert_eq!(MockEngine::count(&engine.bulk_calls), 1);
        assert_eq!(MockEngine::count(&engine.create_calls), 1);
    }

    #[tokio::test]
    async fn test_ingest_writes_to_configured_index() {
        let engine = Arc::new(crate::memory::InMemorySearchEngine::new());
        engine
            .create_index("library", &serde_json::json!({}))
            .await
            .unwrap();
        let pipeline = IngestionPipeline::new(engine.clone(), SearchIndexConfig::new("library"));

        pipeline.ingest(&create_test_documents(3)).await.unwrap();

        assert_eq!(engine.document_count("library").await, 3);
    }

    #[tokio::test]
    async fn test_ingest_bulk_failure_reports_all_unconfirmed() {
        let engine = Arc::new(MockEngine::failing(EngineError::bulk_index(
            "security_exception",
        )));
        let pipeline = IngestionPipeline::new(engine.clone(), SearchIndexConfig::new("docs"));

        let err = pipeline
            .ingest(&create_test_documents(4))
            .await
            .unwrap_err();

        match err {
            SearchIndexError::IngestionError {
                unconfirmed,
                failed,
                message,
            } => {
                assert_eq!(unconfirmed, 4);
                assert!(failed.is_empty());
                assert!(message.contains("security_exception"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // No implicit retry
        assert_eq!(MockEngine::count(&engine.bulk_calls), 1);
    }

    #[tokio::test]
    async fn test_ingest_partial_failure() {
        let engine = Arc::new(MockEngine::rejecting(vec![1, 3]));
        let pipeline = pipeline_with(engine.clone()).await;

        let err = pipeline
            .ingest(&create_test_documents(4))
            .await
            .unwrap_err();

        match err {
            SearchIndexError::IngestionError {
                unconfirmed,
                failed,
                ..
            } => {
                assert_eq!(unconfirmed, 2);
                let positions: Vec<usize> = failed.iter().map(|f| f.position).collect();
                assert_eq!(positions, vec![1, 3]);
                assert_eq!(failed[0].title, "Document 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ingest_detailed_reports_partial_failure() {
        let engine = Arc::new(MockEngine::rejecting(vec![0]));
        let pipeline = pipeline_with(engine.clone()).await;

        let summary = pipeline
            .ingest_detailed(&create_test_documents(3))
            .await
            .unwrap();

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.total(), 3);
    }
}
