//! Projected search results.

use serde::{Deserialize, Serialize};

/// Number of characters of `content` kept in a snippet.
pub const SNIPPET_LENGTH: usize = 50;

/// Marker appended to every snippet.
pub const SNIPPET_ELLIPSIS: &str = "...";

/// A single hit as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
}

impl SearchResult {
    /// Project a hit's title and content into a result.
    pub fn from_hit(title: impl Into<String>, content: &str) -> Self {
        Self {
            title: title.into(),
            snippet: snippet(content),
        }
    }
}

/// Build the preview for a document body.
///
/// Takes the first [`SNIPPET_LENGTH`] characters and always appends
/// [`SNIPPET_ELLIPSIS`], even when the body is shorter than that.
pub fn snippet(content: &str) -> String {
    let mut snippet: String = content.chars().take(SNIPPET_LENGTH).collect();
    snippet.push_str(SNIPPET_ELLIPSIS);
    snippet
}
