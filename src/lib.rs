//! Newsbrief: a one-page news article digest
//!
//! This crate implements a small web application that takes a news article URL,
//! fetches and extracts the article, and renders a short extractive summary,
//! the article's metadata, a representative image and a coarse sentiment label.

pub mod article;
pub mod config;
pub mod nlp;
pub mod url;
pub mod web;
pub mod workflow;

use thiserror::Error;

/// Main error type for Newsbrief operations
#[derive(Debug, Error)]
pub enum NewsbriefError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Language data error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Errors raised while preparing or loading the sentiment lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to download lexicon from {url}: {source}")]
    Download { url: String, source: reqwest::Error },

    #[error("Lexicon contains no usable entries")]
    Empty,
}

/// Article download errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Body exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

/// Sentiment scoring errors
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("Text contains no words to score")]
    NoWords,
}

/// Errors from the non-fatal enrichment pass
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Text contains no keyword candidates")]
    NoKeywords,
}

/// Result type alias for Newsbrief operations
pub type Result<T> = std::result::Result<T, NewsbriefError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use article::{Article, ArticleFields};
pub use config::Config;
pub use nlp::{Lexicon, Sentiment, SentimentAnalyzer};
pub use crate::url::{validate_url, website_name};
pub use workflow::{analyze, ArticleResult, WorkflowError};
