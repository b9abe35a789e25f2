//! OpenSearch request builders.
//!
//! This module builds the search and bulk request bodies sent to the engine.

use serde_json::{json, Value};

use super::index_config::{CONTENT_FIELD, CONTENT_TYPE_FIELD, TITLE_FIELD};
use crate::errors::EngineError;
use doc_search_shared::{Document, SearchQuery};

/// Build an OpenSearch query from a SearchQuery.
///
/// The query has:
/// - a required `multi_match` over `title` and `content` with default scoring
/// - a `term` filter on `content_type`, only when a non-empty filter is given;
///   filter clauses select documents without affecting the score
/// - `_source` restricted to `title` and `content`
///
/// No `size` is set, so the engine's default result window applies.
pub fn build_search_query(query: &SearchQuery) -> Value {
    let mut filter = Vec::new();
    if let Some(content_type) = query.filter() {
        filter.push(json!({ "term": { CONTENT_TYPE_FIELD: content_type } }));
    }

    json!({
        "query": {
            "bool": {
                "must": [
                    {
                        "multi_match": {
                            "query": query.text,
                            "fields": [TITLE_FIELD, CONTENT_FIELD]
                        }
                    }
                ],
                "filter": filter
            }
        },
        "_source": [TITLE_FIELD, CONTENT_FIELD]
    })
}

/// Build the newline-delimited bulk body for indexing documents.
///
/// Each document becomes an `index` action line tagged with the target index
/// followed by its source line. Document IDs are left to the engine.
pub fn build_bulk_body(index: &str, documents: &[Document]) -> Result<Vec<Value>, EngineError> {
    let mut body = Vec::with_capacity(documents.len() * 2);
    for document in documents {
        body.push(json!({ "index": { "_index": index } }));
        body.push(serde_json::to_value(document)?);
    }
    Ok(body)
}
