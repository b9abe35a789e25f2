//! Error types for the document search repository.

mod engine_error;
mod search_index_error;

pub use engine_error::EngineError;
pub use search_index_error::SearchIndexError;
