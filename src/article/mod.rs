//! Article retrieval and extraction
//!
//! This module contains the fetching and parsing side of a submission:
//! - The reachability probe
//! - The article download
//! - Field extraction from the downloaded HTML

mod fetcher;
mod parser;

pub use fetcher::{
    build_http_client, download, probe_url, Download, ProbeResult, MAX_BODY_BYTES,
};
pub use parser::{parse_article, ArticleFields, ParseError};

use url::Url;

/// An extracted article with its enrichment
#[derive(Debug, Clone)]
pub struct Article {
    /// The submitted URL
    pub url: Url,

    /// Fields parsed from the page
    pub fields: ArticleFields,

    /// Keywords from the enrichment pass (empty if it failed)
    pub keywords: Vec<String>,
}

impl Article {
    /// Runs the enrichment pass over the parsed fields
    ///
    /// Enrichment failure is logged and leaves `keywords` empty; it never
    /// fails the article.
    pub fn enrich(url: Url, fields: ArticleFields) -> Self {
        let title = fields.title.as_deref().unwrap_or_default();

        let keywords = match crate::nlp::extract_keywords(title, &fields.text) {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::warn!("Enrichment failed for {}: {}", url, e);
                Vec::new()
            }
        };

        Self {
            url,
            fields,
            keywords,
        }
    }
}
