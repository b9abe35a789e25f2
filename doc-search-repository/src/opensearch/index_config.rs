//! OpenSearch index mappings.
//!
//! This module defines the mappings for the document search index.

use serde_json::{json, Value};

/// Free-text title field.
pub const TITLE_FIELD: &str = "title";

/// Free-text body field.
pub const CONTENT_FIELD: &str = "content";

/// Exact-match category field.
pub const CONTENT_TYPE_FIELD: &str = "content_type";

/// Get the mappings body used when creating the document index.
///
/// - **text**: `title` and `content` are tokenized and analyzed
/// - **keyword**: `content_type` is stored verbatim for exact-match filtering
pub fn get_index_mappings() -> Value {
    json!({
        "mappings": {
            "properties": {
                TITLE_FIELD: {
                    "type": "text"
                },
                CONTENT_FIELD: {
                    "type": "text"
                },
                CONTENT_TYPE_FIELD: {
                    "type": "keyword"
                }
            }
        }
    })
}
