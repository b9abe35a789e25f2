//! Command implementations run by the binary.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::AppError;
use doc_search_repository::SearchIndexClient;
use doc_search_shared::{Document, SearchResult};

/// Create the configured index if it does not exist yet.
pub async fn ensure_index(client: &SearchIndexClient) -> Result<(), AppError> {
    client.ensure_index().await?;
    Ok(())
}

/// Load documents from a JSON file holding an array of documents.
pub fn read_documents(path: &Path) -> Result<Vec<Document>, AppError> {
    let raw = fs::read_to_string(path)?;
    let documents: Vec<Document> = serde_json::from_str(&raw)?;
    Ok(documents)
}

/// Ensure the index, then ingest the documents found in `path`.
pub async fn ingest_file(client: &SearchIndexClient, path: &Path) -> Result<usize, AppError> {
    let documents = read_documents(path)?;
    info!(path = %path.display(), count = documents.len(), "Loaded documents");

    client.ensure_index().await?;
    let inserted = client.ingest(&documents).await?;
    Ok(inserted)
}

/// Run a search and return the results.
pub async fn search(
    client: &SearchIndexClient,
    text: &str,
    content_type: Option<&str>,
) -> Result<Vec<SearchResult>, AppError> {
    Ok(client.search(text, content_type).await?)
}

/// Render results as one `- title: snippet` line each.
pub fn format_results(query: &str, results: &[SearchResult]) -> String {
    let mut output = format!("Results for '{}':\n", query);
    for result in results {
        output.push_str(&format!("- {}: {}\n", result.title, result.snippet));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_search_repository::{InMemorySearchEngine, SearchIndexConfig};
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    fn memory_client() -> SearchIndexClient {
        SearchIndexClient::with_config(
            Arc::new(InMemorySearchEngine::new()),
            SearchIndexConfig::new("docs"),
        )
    }

    fn write_temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_ingest_file_then_search() {
        let file = write_temp_file(
            r#"[
                {"title": "A science thing", "content": "Lorem ipsum dolor sit amet", "content_type": "article"},
                {"title": "Other", "content": "Nothing here", "content_type": "news"}
            ]"#,
        );
        let client = memory_client();

        let inserted = ingest_file(&client, file.path()).await.unwrap();
        assert_eq!(inserted, 2);

        let results = search(&client, "science", Some("article")).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].snippet, "Lorem ipsum dolor sit amet...");
    }

    #[test]
    fn test_read_documents_rejects_unknown_content_type() {
        let file = write_temp_file(
            r#"[{"title": "T", "content": "C", "content_type": "blog"}]"#,
        );

        let result = read_documents(file.path());
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_read_documents_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_documents(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(AppError::IoError(_))));
    }

    #[tokio::test]
    async fn test_search_blank_query_fails() {
        let client = memory_client();
        ensure_index(&client).await.unwrap();

        let result = search(&client, "", None).await;
        assert!(matches!(
            result,
            Err(AppError::SearchIndexError(
                doc_search_repository::SearchIndexError::ValidationError(_)
            ))
        ));
    }

    #[test]
    fn test_format_results() {
        let results = vec![
            SearchResult::from_hit("First", "one"),
            SearchResult::from_hit("Second", "two"),
        ];

        assert_eq!(
            format_results("science", &results),
            "Results for 'science':\n- First: one...\n- Second: two...\n"
        );
    }
}
