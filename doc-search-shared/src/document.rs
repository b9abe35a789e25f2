//! Document model stored in the search index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a document, stored as an exact-match keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Article,
    News,
    Tutorial,
    Report,
}

impl ContentType {
    /// All known content types.
    pub const ALL: [ContentType; 4] = [
        ContentType::Article,
        ContentType::News,
        ContentType::Tutorial,
        ContentType::Report,
    ];

    /// The keyword value written to the index.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::News => "news",
            ContentType::Tutorial => "tutorial",
            ContentType::Report => "report",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known content type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown content type: {0}")]
pub struct ParseContentTypeError(pub String);

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| ParseContentTypeError(s.to_string()))
    }
}

/// A document as submitted for indexing.
///
/// Documents are never updated once written; the index owns them after a
/// successful bulk write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Free-text title.
    pub title: String,
    /// Free-text body.
    pub content: String,
    /// Exact-match category.
    pub content_type: ContentType,
}

impl Document {
    /// Create a new document.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            content_type,
        }
    }
}
