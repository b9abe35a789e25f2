//! The index/query components.
//!
//! Each component holds a shared handle to the search engine and no other
//! state, so all of them are safe to call from concurrent tasks.

mod ingestion_pipeline;
mod query_service;
mod schema_manager;

pub use ingestion_pipeline::IngestionPipeline;
pub use query_service::QueryService;
pub use schema_manager::SchemaManager;
