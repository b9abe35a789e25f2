//! # Doc Search Repository
//!
//! This crate provides the index/query layer of the document search service:
//! the `SearchEngineClient` trait the rest of the crate talks to, an OpenSearch
//! and an in-memory implementation of it, and the three components built on
//! top of it.
//!
//! - [`SchemaManager`]: idempotently creates the document index
//! - [`IngestionPipeline`]: writes document batches in one bulk request
//! - [`QueryService`]: filtered multi-field search with snippet projection
//!
//! [`SearchIndexClient`] bundles the three around one engine handle.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod opensearch;
pub mod services;
pub mod types;

pub use client::SearchIndexClient;
pub use config::SearchIndexConfig;
pub use errors::{EngineError, SearchIndexError};
pub use interfaces::SearchEngineClient;
pub use memory::InMemorySearchEngine;
pub use opensearch::OpenSearchClient;
pub use services::{IngestionPipeline, QueryService, SchemaManager};
pub use types::{BulkWriteSummary, DocumentRef, SearchHit};
