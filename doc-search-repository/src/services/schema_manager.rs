//! Schema manager.
//!
//! Makes sure the document index exists with the fixed field mapping before
//! anything is written to or read from it.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::{EngineError, SearchIndexError};
use crate::interfaces::SearchEngineClient;
use crate::opensearch::get_index_mappings;

/// Creates the document index when it is missing.
pub struct SchemaManager {
    client: Arc<dyn SearchEngineClient>,
}

impl SchemaManager {
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self { client }
    }

    /// Ensure the named index exists with the document mappings.
    ///
    /// Safe to call any number of times: an existing index is left untouched
    /// and no create request is sent for it. The mapping of an existing index
    /// is never altered.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index exists or was created
    /// * `Err(SearchIndexError::SchemaError)` - If the engine is unreachable or
    ///   rejected the creation
    #[instrument(skip(self))]
    pub async fn ensure_index(&self, name: &str) -> Result<(), SearchIndexError> {
        let exists = self.client.index_exists(name).await.map_err(|e| {
            SearchIndexError::schema(format!("Failed to check index {}: {}", name, e))
        })?;

        if exists {
            info!(index = %name, "Index already exists");
            return Ok(());
        }

        match self.client.create_index(name, &get_index_mappings()).await {
            Ok(()) => info!(index = %name, "Index created"),
            // Another caller created it between the check and the create
            Err(EngineError::IndexAlreadyExists(_)) => {
                info!(index = %name, "Index was created concurrently")
            }
            Err(e) => {
                return Err(SearchIndexError::schema(format!(
                    "Failed to create index {}: {}",
                    name, e
                )))
            }
        }

        Ok(())
    }
}
