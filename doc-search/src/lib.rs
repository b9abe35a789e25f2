//! # Doc Search
//!
//! Main library for the document search command-line tool.
//!
//! This crate reads configuration from the environment, wires the search
//! engine backend into the index/query components and exposes the commands
//! the binary runs.

pub mod commands;
pub mod config;

pub use config::{Backend, Dependencies, Settings};

use thiserror::Error;

/// Errors that can occur during initialization or while running a command.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Index, ingestion or query error.
    #[error("Search index error: {0}")]
    SearchIndexError(#[from] doc_search_repository::SearchIndexError),

    /// Search engine error.
    #[error("Engine error: {0}")]
    EngineError(#[from] doc_search_repository::EngineError),

    /// Input file could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
