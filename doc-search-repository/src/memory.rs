//! In-memory implementation of the search engine client.
//!
//! Keeps indices in process memory and evaluates the same query body shape
//! the query service sends to OpenSearch: a `bool` query with `multi_match`
//! clauses under `must`, `term` clauses under `filter`, and a `_source` field
//! list. Documents are visible to queries as soon as a bulk write returns.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::EngineError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::parse_search_response;
use crate::types::{BulkWriteSummary, SearchHit};
use doc_search_shared::Document;

#[derive(Debug, Default)]
struct StoredIndex {
    mappings: Value,
    sources: Vec<Value>,
}

/// Search engine backed by process memory.
#[derive(Debug, Default)]
pub struct InMemorySearchEngine {
    indices: RwLock<HashMap<String, StoredIndex>>,
}

impl InMemorySearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mappings an index was created with, if it exists.
    pub async fn mappings(&self, index: &str) -> Option<Value> {
        self.indices
            .read()
            .await
            .get(index)
            .map(|stored| stored.mappings.clone())
    }

    /// Number of documents stored in an index.
    pub async fn document_count(&self, index: &str) -> usize {
        self.indices
            .read()
            .await
            .get(index)
            .map_or(0, |stored| stored.sources.len())
    }
}

#[async_trait]
impl SearchEngineClient for InMemorySearchEngine {
    async fn index_exists(&self, index: &str) -> Result<bool, EngineError> {
        Ok(self.indices.read().await.contains_key(index))
    }

    async fn create_index(&self, index: &str, mappings: &Value) -> Result<(), EngineError> {
        let mut indices = self.indices.write().await;
        if indices.contains_key(index) {
            return Err(EngineError::IndexAlreadyExists(index.to_string()));
        }
        indices.insert(
            index.to_string(),
            StoredIndex {
                mappings: mappings.clone(),
                sources: Vec::new(),
            },
        );
        debug!(index = %index, "Created in-memory index");
        Ok(())
    }

    async fn bulk_write(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<BulkWriteSummary, EngineError> {
        let sources = documents
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        let mut indices = self.indices.write().await;
        let stored = indices
            .get_mut(index)
            .ok_or_else(|| EngineError::bulk_index(format!("no such index [{}]", index)))?;
        stored.sources.extend(sources);

        Ok(BulkWriteSummary::all_succeeded(documents.len()))
    }

    async fn query(&self, index: &str, body: &Value) -> Result<Vec<SearchHit>, EngineError> {
        let compiled = CompiledQuery::from_body(body)?;

        let indices = self.indices.read().await;
        let stored = indices
            .get(index)
            .ok_or_else(|| EngineError::query(format!("no such index [{}]", index)))?;

        let mut scored: Vec<(usize, &Value)> = stored
            .sources
            .iter()
            .filter(|source| compiled.passes_filters(source))
            .filter_map(|source| compiled.score(source).map(|score| (score, source)))
            .collect();
        // Stable sort keeps insertion order between equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let hits: Vec<Value> = scored
            .into_iter()
            .map(|(score, source)| {
                json!({
                    "_score": score,
                    "_source": compiled.project(source)
                })
            })
            .collect();

        parse_search_response(&json!({ "hits": { "hits": hits } }))
    }

    async fn health_check(&self) -> Result<bool, EngineError> {
        Ok(true)
    }
}

struct MultiMatch {
    tokens: HashSet<String>,
    fields: Vec<String>,
}

struct CompiledQuery {
    must: Vec<MultiMatch>,
    terms: Vec<(String, Value)>,
    source_fields: Option<Vec<String>>,
}

impl CompiledQuery {
    fn from_body(body: &Value) -> Result<Self, EngineError> {
        let bool_query = body
            .get("query")
            .and_then(|q| q.get("bool"))
            .ok_or_else(|| EngineError::query("only bool queries are supported"))?;

        let must = clauses(bool_query, "must")
            .iter()
            .map(|clause| -> Result<MultiMatch, EngineError> {
                let multi_match = clause
                    .get("multi_match")
                    .ok_or_else(|| EngineError::query("must clauses must be multi_match"))?;
                let text = multi_match
                    .get("query")
                    .and_then(|q| q.as_str())
                    .ok_or_else(|| EngineError::query("multi_match requires a query string"))?;
                let fields = string_list(multi_match.get("fields"))
                    .ok_or_else(|| EngineError::query("multi_match requires fields"))?;
                Ok(MultiMatch {
                    tokens: tokenize(text).collect(),
                    fields,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let terms = clauses(bool_query, "filter")
            .iter()
            .map(|clause| -> Result<(String, Value), EngineError> {
                clause
                    .get("term")
                    .and_then(|t| t.as_object())
                    .and_then(|t| t.iter().next())
                    .map(|(field, value)| (field.clone(), value.clone()))
                    .ok_or_else(|| EngineError::query("filter clauses must be term queries"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            must,
            terms,
            source_fields: string_list(body.get("_source")),
        })
    }

    fn passes_filters(&self, source: &Value) -> bool {
        self.terms
            .iter()
            .all(|(field, value)| source.get(field) == Some(value))
    }

    /// Best-field score summed over `must` clauses; `None` if any clause misses.
    fn score(&self, source: &Value) -> Option<usize> {
        self.must.iter().try_fold(0, |total, clause| {
            let best = clause
                .fields
                .iter()
                .filter_map(|field| source.get(field).and_then(|v| v.as_str()))
                .map(|text| {
                    let field_tokens: HashSet<String> = tokenize(text).collect();
                    clause.tokens.intersection(&field_tokens).count()
                })
                .max()
                .unwrap_or(0);
            (best > 0).then_some(total + best)
        })
    }

    fn project(&self, source: &Value) -> Value {
        match (&self.source_fields, source.as_object()) {
            (Some(fields), Some(object)) => {
                let projected: Map<String, Value> = object
                    .iter()
                    .filter(|(key, _)| fields.iter().any(|f| f == *key))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                Value::Object(projected)
            }
            _ => source.clone(),
        }
    }
}

fn clauses<'a>(bool_query: &'a Value, key: &str) -> &'a [Value] {
    bool_query
        .get(key)
        .and_then(|c| c.as_array())
        .map(|c| c.as_slice())
        .unwrap_or(&[])
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    value?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}
