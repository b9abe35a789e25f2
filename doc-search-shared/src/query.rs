//! Query parameters accepted by the query service.

/// A keyword query with an optional exact-match content type filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// The text matched against `title` and `content`.
    pub text: String,
    /// Optional `content_type` value to restrict hits to.
    pub content_type: Option<String>,
}

impl SearchQuery {
    /// Create an unfiltered query.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            content_type: None,
        }
    }

    /// Restrict hits to the given content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether the query text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The filter value, if one was given and is non-empty.
    pub fn filter(&self) -> Option<&str> {
        self.content_type.as_deref().filter(|ct| !ct.is_empty())
    }
}
