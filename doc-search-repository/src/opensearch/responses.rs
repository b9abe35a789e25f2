//! OpenSearch response parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::EngineError;
use crate::types::{BulkWriteSummary, DocumentRef, SearchHit};
use doc_search_shared::Document;

/// Parse a `_search` response body into hits, keeping engine order.
///
/// A response without `hits.hits`, or a hit whose `_source` lacks `title`
/// or `content`, is malformed.
pub(crate) fn parse_search_response(body: &Value) -> Result<Vec<SearchHit>, EngineError> {
    let hits = body
        .get("hits")
        .and_then(|h| h.get("hits"))
        .and_then(|h| h.as_array())
        .ok_or_else(|| EngineError::parse("Response has no hits array"))?;

    hits.iter()
        .enumerate()
        .map(|(position, hit)| {
            let source = hit
                .get("_source")
                .ok_or_else(|| EngineError::parse(format!("Hit {} has no _source", position)))?;
            SearchHit::deserialize(source)
                .map_err(|e| EngineError::parse(format!("Hit {} is malformed: {}", position, e)))
        })
        .collect()
}

/// Parse a `_bulk` response body against the documents that were submitted.
///
/// Items come back in submission order; an item carrying an `error` object
/// marks the document at the same position as rejected. A response flagged
/// with `errors` whose rejected items cannot be identified is malformed.
pub(crate) fn parse_bulk_response(
    documents: &[Document],
    body: &Value,
) -> Result<BulkWriteSummary, EngineError> {
    let has_errors = body
        .get("errors")
        .and_then(|e| e.as_bool())
        .unwrap_or(false);
    if !has_errors {
        return Ok(BulkWriteSummary::all_succeeded(documents.len()));
    }

    let items = body
        .get("items")
        .and_then(|i| i.as_array())
        .ok_or_else(|| EngineError::parse("Bulk response reports errors but has no items"))?;

    let failed: Vec<DocumentRef> = items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let error = item.get("index").and_then(|i| i.get("error"))?;
            let title = documents
                .get(position)
                .map(|d| d.title.clone())
                .unwrap_or_default();
            Some(DocumentRef::new(position, title, error_reason(error)))
        })
        .collect();

    if failed.is_empty() {
        return Err(EngineError::parse(
            "Bulk response reports errors but no failed item could be identified",
        ));
    }

    Ok(BulkWriteSummary {
        succeeded: documents.len().saturating_sub(failed.len()),
        failed,
    })
}

fn error_reason(error: &Value) -> String {
    let kind = error.get("type").and_then(|t| t.as_str());
    let reason = error.get("reason").and_then(|r| r.as_str());
    match (kind, reason) {
        (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
        (Some(kind), None) => kind.to_string(),
        (None, Some(reason)) => reason.to_string(),
        (None, None) => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_search_shared::ContentType;
    use serde_json::json;

    #[test]
    fn test_parse_search_response() {
        let body = json!({
            "took": 3,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    { "_id": "a", "_score": 2.1, "_source": { "title": "First", "content": "one" } },
                    { "_id": "b", "_score": 0.7, "_source": { "title": "Second", "content": "two" } }
                ]
            }
        });

        let hits = parse_search_response(&body).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "First");
        assert_eq!(hits[1].content, "two");
    }

    #[test]
    fn test_parse_search_response_empty() {
        let body = json!({ "hits": { "hits": [] } });
        assert!(parse_search_response(&body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_search_response_missing_hits() {
        let body = json!({ "error": "index_not_found_exception" });
        assert!(matches!(
            parse_search_response(&body),
            Err(EngineError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_search_response_missing_content() {
        let body = json!({ "hits": { "hits": [ { "_source": { "title": "Only title" } } ] } });
        assert!(matches!(
            parse_search_response(&body),
            Err(EngineError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_bulk_response_success() {
        let documents = vec![
            Document::new("One", "a", ContentType::Article),
            Document::new("Two", "b", ContentType::News),
        ];
        let body = json!({ "took": 5, "errors": false, "items": [] });

        let summary = parse_bulk_response(&documents, &body).unwrap();

        assert_eq!(summary, BulkWriteSummary::all_succeeded(2));
    }

    #[test]
    fn test_parse_bulk_response_partial_failure() {
        let documents = vec![
            Document::new("One", "a", ContentType::Article),
            Document::new("Two", "b", ContentType::News),
            Document::new("Three", "c", ContentType::Report),
        ];
        let body = json!({
            "errors": true,
            "items": [
                { "index": { "status": 201, "result": "created" } },
                { "index": { "status": 400, "error": {
                    "type": "mapper_parsing_exception",
                    "reason": "failed to parse field [content_type]"
                } } },
                { "index": { "status": 201, "result": "created" } }
            ]
        });

        let summary = parse_bulk_response(&documents, &body).unwrap();

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].position, 1);
        assert_eq!(summary.failed[0].title, "Two");
        assert_eq!(
            summary.failed[0].reason,
            "mapper_parsing_exception: failed to parse field [content_type]"
        );
    }

    #[test]
    fn test_parse_bulk_response_errors_without_items() {
        let documents = vec![Document::new("One", "a", ContentType::Article)];
        let body = json!({ "errors": true });

        assert!(matches!(
            parse_bulk_response(&documents, &body),
            Err(EngineError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_bulk_response_errors_without_failed_items() {
        let documents = vec![Document::new("One", "a", ContentType::Article)];
        let body = json!({
            "errors": true,
            "items": [ { "create": { "status": 409, "error": { "type": "version_conflict_engine_exception" } } } ]
        });

        assert!(matches!(
            parse_bulk_response(&documents, &body),
            Err(EngineError::ParseError(_))
        ));
    }
}
