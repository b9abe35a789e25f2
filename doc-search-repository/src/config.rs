//! Configuration types for the index/query components.

/// Index name used when none is configured.
pub const DEFAULT_INDEX_NAME: &str = "test_index";

/// Configuration shared by the ingestion pipeline and the query service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndexConfig {
    /// Name of the index documents are written to and searched in.
    pub index_name: String,
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

impl SearchIndexConfig {
    /// Create a config targeting the given index.
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
        }
    }
}
