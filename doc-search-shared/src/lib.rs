//! # Doc Search Shared
//!
//! Shared types used across the document search crates: the document model,
//! the query parameters and the projected search result.

pub mod document;
pub mod query;
pub mod result;

pub use document::{ContentType, Document, ParseContentTypeError};
pub use query::SearchQuery;
pub use result::{snippet, SearchResult, SNIPPET_ELLIPSIS, SNIPPET_LENGTH};
