//! Settings read from the environment.

use std::env;
use std::str::FromStr;

use doc_search_repository::config::DEFAULT_INDEX_NAME;

use crate::AppError;

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Which search engine backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    OpenSearch,
    Memory,
}

impl FromStr for Backend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "opensearch" => Ok(Backend::OpenSearch),
            "memory" => Ok(Backend::Memory),
            other => Err(AppError::config(format!("Unknown backend: {}", other))),
        }
    }
}

/// Runtime settings for the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend: Backend,
    pub opensearch_url: String,
    pub index_name: String,
    /// Basic auth username and password.
    pub credentials: Option<(String, String)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: Backend::OpenSearch,
            opensearch_url: DEFAULT_OPENSEARCH_URL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            credentials: None,
        }
    }
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DOC_SEARCH_BACKEND`: `opensearch` or `memory` (default: opensearch)
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `OPENSEARCH_INDEX`: Index name (default: test_index)
    /// - `OPENSEARCH_USER` / `OPENSEARCH_PASS`: Basic auth, used only when both are set
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let backend = match lookup("DOC_SEARCH_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.backend,
        };

        let credentials = match (lookup("OPENSEARCH_USER"), lookup("OPENSEARCH_PASS")) {
            (Some(user), Some(pass)) => Some((user, pass)),
            (None, None) => None,
            _ => {
                return Err(AppError::config(
                    "OPENSEARCH_USER and OPENSEARCH_PASS must be set together",
                ))
            }
        };

        Ok(Self {
            backend,
            opensearch_url: lookup("OPENSEARCH_URL").unwrap_or(defaults.opensearch_url),
            index_name: lookup("OPENSEARCH_INDEX").unwrap_or(defaults.index_name),
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.index_name, "test_index");
        assert_eq!(settings.opensearch_url, "http://localhost:9200");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DOC_SEARCH_BACKEND", "Memory"),
            ("OPENSEARCH_URL", "http://opensearch:9200"),
            ("OPENSEARCH_INDEX", "library"),
            ("OPENSEARCH_USER", "admin"),
            ("OPENSEARCH_PASS", "secret"),
        ]))
        .unwrap();

        assert_eq!(settings.backend, Backend::Memory);
        assert_eq!(settings.opensearch_url, "http://opensearch:9200");
        assert_eq!(settings.index_name, "library");
        assert_eq!(
            settings.credentials,
            Some(("admin".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn test_partial_credentials_are_rejected() {
        let result = Settings::from_lookup(lookup_from(&[("OPENSEARCH_USER", "admin")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result = Settings::from_lookup(lookup_from(&[("DOC_SEARCH_BACKEND", "solr")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
