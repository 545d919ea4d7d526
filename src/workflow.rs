//! The submission workflow
//!
//! A submitted URL goes through, in order:
//! 1. Validation
//! 2. Reachability probe
//! 3. Download, download check, and parse
//! 4. Enrichment (non-fatal)
//! 5. Summary and sentiment
//!
//! The first failing stage ends the workflow with a [`WorkflowError`] whose
//! [`FailureKind`] selects the message shown to the user.

use crate::article::{self, Article, ProbeResult};
use crate::nlp::{summarize, Sentiment, SentimentAnalyzer};
use crate::url::{validate_url, website_name};
use crate::{FetchError, UrlError};
use reqwest::Client;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Title shown when the page has none
pub const UNTITLED: &str = "Untitled";

/// Shown when the publish date is missing or unusable
pub const DATE_NOT_AVAILABLE: &str = "N/A";

/// Display format of the publish date ("Month DD, YYYY")
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Everything rendered for a successfully processed article
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleResult {
    pub title: String,
    /// Authors joined with ", ", or the website name when there are none
    pub authors: String,
    pub publish_date: String,
    pub text: String,
    pub summary: String,
    pub top_image: Option<String>,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
}

impl ArticleResult {
    /// Builds the displayed result from an extracted article
    pub fn from_article(article: Article, analyzer: &SentimentAnalyzer) -> Self {
        let fields = article.fields;

        let authors = if fields.authors.is_empty() {
            website_name(&article.url)
        } else {
            fields.authors.join(", ")
        };

        let publish_date = fields
            .publish_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| DATE_NOT_AVAILABLE.to_string());

        let title = fields
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());

        let summary = summarize(&fields.text);
        let sentiment = analyzer.classify(&fields.text);

        Self {
            title,
            authors,
            publish_date,
            summary,
            text: fields.text,
            top_image: fields.top_image.filter(|src| !src.is_empty()),
            sentiment,
            keywords: article.keywords,
        }
    }
}

/// User-facing failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidUrl,
    Unreachable,
    NotHtml,
    DownloadFailed,
    NotRetrieved,
    ParseFailed,
    EmptyText,
}

impl FailureKind {
    /// The message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidUrl => "Please enter a valid URL (include http/https).",
            Self::Unreachable => {
                "Failed to download the content of the URL. Try another link or check the URL."
            }
            Self::NotHtml => "URL does not appear to be an HTML article.",
            Self::DownloadFailed => "Failed to download article content. Try another URL.",
            Self::NotRetrieved => "Could not retrieve the article content. Try a different URL.",
            Self::ParseFailed => "Article parsing failed. Try another URL.",
            Self::EmptyText => {
                "Article text is empty or could not be extracted. Try another link."
            }
        }
    }

    /// Stable identifier, safe to store in a cookie
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid-url",
            Self::Unreachable => "unreachable",
            Self::NotHtml => "not-html",
            Self::DownloadFailed => "download-failed",
            Self::NotRetrieved => "not-retrieved",
            Self::ParseFailed => "parse-failed",
            Self::EmptyText => "empty-text",
        }
    }
}

impl FromStr for FailureKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invalid-url" => Ok(Self::InvalidUrl),
            "unreachable" => Ok(Self::Unreachable),
            "not-html" => Ok(Self::NotHtml),
            "download-failed" => Ok(Self::DownloadFailed),
            "not-retrieved" => Ok(Self::NotRetrieved),
            "parse-failed" => Ok(Self::ParseFailed),
            "empty-text" => Ok(Self::EmptyText),
            _ => Err(()),
        }
    }
}

/// Why a submission was rejected
///
/// The `Display` text carries internal detail for logs; users only ever see
/// [`WorkflowError::user_message`].
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),

    #[error("{url} is unreachable: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("{url} is not HTML (Content-Type: '{content_type}')")]
    NotHtml { url: String, content_type: String },

    #[error("Download of {url} failed: {source}")]
    DownloadFailed { url: String, source: FetchError },

    #[error("No content retrieved from {url}")]
    NotRetrieved { url: String },

    #[error("Parsing {url} failed: {source}")]
    ParseFailed {
        url: String,
        source: article::ParseError,
    },

    #[error("No article text extracted from {url}")]
    EmptyText { url: String },
}

impl WorkflowError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidUrl(_) => FailureKind::InvalidUrl,
            Self::Unreachable { .. } => FailureKind::Unreachable,
            Self::NotHtml { .. } => FailureKind::NotHtml,
            Self::DownloadFailed { .. } => FailureKind::DownloadFailed,
            Self::NotRetrieved { .. } => FailureKind::NotRetrieved,
            Self::ParseFailed { .. } => FailureKind::ParseFailed,
            Self::EmptyText { .. } => FailureKind::EmptyText,
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.kind().message()
    }
}

/// Processes one submitted URL end to end
///
/// # Arguments
///
/// * `client` - HTTP client used for both the probe and the download
/// * `analyzer` - Sentiment analyzer
/// * `raw` - The submitted string, already trimmed
///
/// # Returns
///
/// * `Ok(ArticleResult)` - Everything needed to render the result page
/// * `Err(WorkflowError)` - The first stage that failed
pub async fn analyze(
    client: &Client,
    analyzer: &SentimentAnalyzer,
    raw: &str,
) -> Result<ArticleResult, WorkflowError> {
    let url = validate_url(raw)?;

    check_reachable(client, &url).await?;
    let article = extract_article(client, url).await?;

    Ok(ArticleResult::from_article(article, analyzer))
}

async fn check_reachable(client: &Client, url: &Url) -> Result<(), WorkflowError> {
    match article::probe_url(client, url).await {
        ProbeResult::Reachable { content_type } => {
            tracing::debug!("{} is reachable ({})", url, content_type);
            Ok(())
        }
        ProbeResult::ContentMismatch { content_type } => {
            tracing::warn!("{} is not HTML: '{}'", url, content_type);
            Err(WorkflowError::NotHtml {
                url: url.to_string(),
                content_type,
            })
        }
        ProbeResult::HttpError { status_code } => {
            tracing::warn!("Probe of {} returned HTTP {}", url, status_code);
            Err(WorkflowError::Unreachable {
                url: url.to_string(),
                reason: format!("HTTP {}", status_code),
            })
        }
        ProbeResult::NetworkError { error } => {
            tracing::warn!("Probe of {} failed: {}", url, error);
            Err(WorkflowError::Unreachable {
                url: url.to_string(),
                reason: error,
            })
        }
    }
}

async fn extract_article(client: &Client, url: Url) -> Result<Article, WorkflowError> {
    let page = article::download(client, &url).await.map_err(|source| {
        tracing::error!("Article download failed for {}: {}", url, source);
        WorkflowError::DownloadFailed {
            url: url.to_string(),
            source,
        }
    })?;

    if !page.is_downloaded() {
        tracing::warn!("Nothing downloaded for {}", url);
        return Err(WorkflowError::NotRetrieved {
            url: url.to_string(),
        });
    }

    let mut fields = article::parse_article(&page.body, &page.final_url).map_err(|source| {
        tracing::error!("Article parsing failed for {}: {}", url, source);
        WorkflowError::ParseFailed {
            url: url.to_string(),
            source,
        }
    })?;

    fields.text = fields.text.trim().to_string();
    if fields.text.is_empty() {
        tracing::warn!("Empty article text for {}", url);
        return Err(WorkflowError::EmptyText {
            url: url.to_string(),
        });
    }

    tracing::info!(
        "Extracted {} ({} chars, {} authors)",
        url,
        fields.text.len(),
        fields.authors.len()
    );

    Ok(Article::enrich(url, fields))
}
