//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend, plus the request bodies and response
//! parsing shared with the in-memory engine.

mod client;
mod index_config;
mod queries;
mod responses;

pub use client::OpenSearchClient;
pub use index_config::{get_index_mappings, CONTENT_FIELD, CONTENT_TYPE_FIELD, TITLE_FIELD};
pub use queries::{build_bulk_body, build_search_query};
pub(crate) use responses::parse_search_response;
