//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    BulkParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use super::queries::build_bulk_body;
use super::responses::{parse_bulk_response, parse_search_response};
use crate::errors::EngineError;
use crate::interfaces::SearchEngineClient;
use crate::types::{BulkWriteSummary, SearchHit};
use doc_search_shared::Document;

/// Error type OpenSearch reports when creating an index that is already there.
const ALREADY_EXISTS_ERROR: &str = "resource_already_exists_exception";

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://localhost:9200").await?;
/// let exists = client.index_exists("test_index").await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(EngineError)` - If the URL is invalid or transport setup fails
    pub async fn new(url: &str) -> Result<Self, EngineError> {
        Self::build(url, None)
    }

    /// Create a new OpenSearch client that authenticates with basic credentials.
    pub async fn with_credentials(
        url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, EngineError> {
        Self::build(url, Some(Credentials::Basic(username.into(), password.into())))
    }

    fn build(url: &str, credentials: Option<Credentials>) -> Result<Self, EngineError> {
        let parsed_url = Url::parse(url).map_err(|e| EngineError::connection(e.to_string()))?;

        let authenticated = credentials.is_some();
        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        if let Some(credentials) = credentials {
            builder = builder.auth(credentials);
        }
        let transport = builder
            .build()
            .map_err(|e| EngineError::connection(e.to_string()))?;

        info!(url = %url, authenticated, "Created OpenSearch client");

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self))]
    async fn index_exists(&self, index: &str) -> Result<bool, EngineError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| EngineError::connection(e.to_string()))?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            status => {
                error!(status, "Index exists request failed");
                Err(EngineError::connection(format!(
                    "Index exists check failed with status {}",
                    status
                )))
            }
        }
    }

    #[instrument(skip(self, mappings))]
    async fn create_index(&self, index: &str, mappings: &Value) -> Result<(), EngineError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(mappings.clone())
            .send()
            .await
            .map_err(|e| EngineError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            if is_already_exists(&error_body) {
                return Err(EngineError::IndexAlreadyExists(index.to_string()));
            }
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(EngineError::index_creation(format!(
                "Create index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(index = %index, "Index created");
        Ok(())
    }

    #[instrument(skip(self, documents), fields(count = documents.len()))]
    async fn bulk_write(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<BulkWriteSummary, EngineError> {
        let body: Vec<JsonBody<Value>> = build_bulk_body(index, documents)?
            .into_iter()
            .map(JsonBody::from)
            .collect();

        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(|e| EngineError::bulk_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(EngineError::bulk_index(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| EngineError::parse(e.to_string()))?;

        let summary = parse_bulk_response(documents, &response_body)?;
        if !summary.is_complete() {
            warn!(
                succeeded = summary.succeeded,
                failed = summary.failed.len(),
                "Bulk request had rejected documents"
            );
        }
        Ok(summary)
    }

    #[instrument(skip(self, body))]
    async fn query(&self, index: &str, body: &Value) -> Result<Vec<SearchHit>, EngineError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(body.clone())
            .send()
            .await
            .map_err(|e| EngineError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(EngineError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| EngineError::parse(e.to_string()))?;

        parse_search_response(&response_body)
    }

    async fn health_check(&self) -> Result<bool, EngineError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| EngineError::connection(e.to_string()))?;

        if !response.status_code().is_success() {
            return Ok(false);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| EngineError::parse(e.to_string()))?;

        let status = body.get("status").and_then(|s| s.as_str()).unwrap_or("red");
        debug!(cluster_status = %status, "Cluster health");
        Ok(status != "red")
    }
}

fn is_already_exists(error_body: &str) -> bool {
    error_body.contains(ALREADY_EXISTS_ERROR)
}
