//! Query service.
//!
//! Builds the filtered multi-field query, runs it against the configured
//! index and projects each hit into a title and a snippet.

use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::config::SearchIndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::build_search_query;
use doc_search_shared::{SearchQuery, SearchResult};

/// Answers keyword queries against the configured index.
pub struct QueryService {
    client: Arc<dyn SearchEngineClient>,
    config: SearchIndexConfig,
}

impl QueryService {
    pub fn new(client: Arc<dyn SearchEngineClient>, config: SearchIndexConfig) -> Self {
        Self { client, config }
    }

    /// Search for `text`, optionally restricted to one content type.
    ///
    /// An empty `content_type` is the same as no filter.
    pub async fn search(
        &self,
        text: &str,
        content_type: Option<&str>,
    ) -> Result<Vec<SearchResult>, SearchIndexError> {
        let mut query = SearchQuery::new(text);
        query.content_type = content_type.map(str::to_string);
        self.execute(&query).await
    }

    /// Run a query and project its hits.
    ///
    /// Results keep the engine's relevance order. The engine's default result
    /// window applies; no page size is requested.
    ///
    /// # Returns
    ///
    /// * `Ok(results)` - One result per hit, possibly empty
    /// * `Err(SearchIndexError::ValidationError)` - The query text is blank;
    ///   nothing was sent to the engine
    /// * `Err(SearchIndexError::SearchError)` - The engine failed or returned a
    ///   malformed response
    #[instrument(skip(self), fields(index = %self.config.index_name))]
    pub async fn execute(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchIndexError> {
        if query.is_blank() {
            return Err(SearchIndexError::validation("Query text must not be empty"));
        }

        let body = build_search_query(query);
        let hits = self
            .client
            .query(&self.config.index_name, &body)
            .await
            .map_err(|e| {
                error!(error = %e, "Search failed");
                SearchIndexError::search(e.to_string())
            })?;

        debug!(hit_count = hits.len(), "Search completed");

        Ok(hits
            .into_iter()
            .map(|hit| SearchResult::from_hit(hit.title, &hit.content))
            .collect())
    }
}
