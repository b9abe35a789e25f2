//! Dependency initialization and wiring for the document search service.

use std::sync::Arc;
use tracing::info;

use super::settings::{Backend, Settings};
use crate::AppError;
use doc_search_repository::{
    InMemorySearchEngine, OpenSearchClient, SearchEngineClient, SearchIndexClient,
    SearchIndexConfig,
};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Client bundling the schema manager, ingestion pipeline and query service.
    pub client: SearchIndexClient,
}

impl Dependencies {
    /// Initialize all dependencies from settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized and health-checked dependencies
    /// * `Err(AppError)` - If the engine client cannot be created or is unhealthy
    pub async fn new(settings: &Settings) -> Result<Self, AppError> {
        info!(
            backend = ?settings.backend,
            opensearch_url = %settings.opensearch_url,
            index = %settings.index_name,
            "Initializing dependencies"
        );

        let engine: Arc<dyn SearchEngineClient> = match settings.backend {
            Backend::OpenSearch => {
                let client = match &settings.credentials {
                    Some((user, pass)) => {
                        OpenSearchClient::with_credentials(&settings.opensearch_url, user, pass)
                            .await
                    }
                    None => OpenSearchClient::new(&settings.opensearch_url).await,
                }
                .map_err(|e| {
                    AppError::config(format!("Failed to create OpenSearch client: {}", e))
                })?;
                Arc::new(client)
            }
            Backend::Memory => Arc::new(InMemorySearchEngine::new()),
        };

        Self::from_engine(engine, settings).await
    }

    /// Wire an already constructed engine and fail fast if it is unhealthy.
    pub async fn from_engine(
        engine: Arc<dyn SearchEngineClient>,
        settings: &Settings,
    ) -> Result<Self, AppError> {
        let config = SearchIndexConfig::new(settings.index_name.clone());
        let deps = Self {
            client: SearchIndexClient::with_config(engine, config),
        };
        deps.verify().await?;

        Ok(deps)
    }

    /// Verify the engine is reachable and healthy.
    pub async fn verify(&self) -> Result<(), AppError> {
        let healthy = self
            .client
            .health_check()
            .await
            .map_err(|e| AppError::config(format!("Search engine health check failed: {}", e)))?;

        if !healthy {
            return Err(AppError::config("Search engine cluster is unhealthy"));
        }

        info!("Search engine connection verified");
        Ok(())
    }
}
