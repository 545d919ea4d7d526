//! HTTP fetcher implementation
//!
//! This module handles all outbound HTTP requests for a submission:
//! - Building the HTTP client with the browser-like user agent and timeout
//! - The reachability probe (status and Content-Type check)
//! - Downloading the article body for extraction

use crate::config::FetchConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Largest article body accepted by [`download`]
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Result of a reachability probe
#[derive(Debug)]
pub enum ProbeResult {
    /// The URL answered with a success status and an HTML content type
    Reachable {
        /// Content-Type header value
        content_type: String,
    },

    /// The page is not HTML (Content-Type mismatch)
    ContentMismatch {
        /// The actual Content-Type received (empty if absent)
        content_type: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// A downloaded page
#[derive(Debug, Clone)]
pub struct Download {
    /// Final URL after redirects
    pub final_url: Url,
    /// Page body content
    pub body: String,
}

impl Download {
    /// Returns true if any content was actually retrieved
    pub fn is_downloaded(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The outbound fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use newsbrief::article::build_http_client;
/// use newsbrief::config::FetchConfig;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Checks that a URL is reachable and serves HTML
///
/// Sends one GET request. Any transport error or timeout, any non-success
/// status, and any Content-Type not containing `text/html` is a failure.
/// The body is not read.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to probe
///
/// # Returns
///
/// A ProbeResult describing the outcome
pub async fn probe_url(client: &Client, url: &Url) -> ProbeResult {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => return classify_network_error(&e),
    };

    let status = response.status();
    if !status.is_success() {
        return ProbeResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return ProbeResult::ContentMismatch { content_type };
    }

    ProbeResult::Reachable { content_type }
}

/// Downloads the page at `url` for extraction
///
/// The body is read in chunks and abandoned once it passes
/// [`MAX_BODY_BYTES`].
///
/// # Returns
///
/// * `Ok(Download)` - The body (possibly empty) and the final URL
/// * `Err(FetchError)` - Transport error, timeout, non-success status, or oversize body
pub async fn download(client: &Client, url: &Url) -> Result<Download, FetchError> {
    download_limited(client, url, MAX_BODY_BYTES).await
}

async fn download_limited(
    client: &Client,
    url: &Url,
    limit: usize,
) -> Result<Download, FetchError> {
    let mut response = client.get(url.clone()).send().await?.error_for_status()?;
    let final_url = response.url().clone();

    if response
        .content_length()
        .is_some_and(|length| length > limit as u64)
    {
        return Err(FetchError::TooLarge { limit });
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if bytes.len() + chunk.len() > limit {
            return Err(FetchError::TooLarge { limit });
        }
        bytes.extend_from_slice(&chunk);
    }

    let body = String::from_utf8_lossy(&bytes).into_owned();
    Ok(Download { final_url, body })
}

fn classify_network_error(error: &reqwest::Error) -> ProbeResult {
    let error = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else {
        error.to_string()
    };

    ProbeResult::NetworkError { error }
}
