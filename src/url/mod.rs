//! URL handling module for Newsbrief
//!
//! This module validates user-submitted article URLs and derives the
//! website name shown when an article carries no author.

mod domain;

use crate::{UrlError, UrlResult};
use ::url::{Host, Url};

pub use domain::website_name;

/// Validates a user-supplied string as an HTTP(S) article URL
///
/// The string must parse as an absolute URL with an `http` or `https`
/// scheme and a host. The host must be an IP address or a dotted domain
/// name made of alphanumeric/hyphen labels.
///
/// # Arguments
///
/// * `raw` - The submitted string (already trimmed by the caller)
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The string is not an acceptable article URL
///
/// # Examples
///
/// ```
/// use newsbrief::url::validate_url;
///
/// assert!(validate_url("https://www.example.com/story").is_ok());
/// assert!(validate_url("example.com/story").is_err());
/// assert!(validate_url("ftp://example.com/file").is_err());
/// ```
pub fn validate_url(raw: &str) -> UrlResult<Url> {
    if raw.is_empty() {
        return Err(UrlError::Malformed("empty input".to_string()));
    }

    // The parser would silently percent-encode these
    if raw.chars().any(char::is_whitespace) {
        return Err(UrlError::Malformed(format!("'{}' contains whitespace", raw)));
    }

    let url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlError::InvalidScheme(other.to_string())),
    }

    match url.host() {
        Some(Host::Domain(domain)) => validate_domain(domain)?,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        None => return Err(UrlError::MissingDomain),
    }

    Ok(url)
}

/// Validates a domain name: dotted labels, no empty or hyphen-edged labels
fn validate_domain(domain: &str) -> UrlResult<()> {
    if domain.is_empty() {
        return Err(UrlError::MissingDomain);
    }

    if !domain.contains('.') {
        return Err(UrlError::Malformed(format!(
            "domain '{}' must contain at least one dot",
            domain
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(UrlError::Malformed(format!(
                "domain '{}' contains an empty label",
                domain
            )));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(UrlError::Malformed(format!(
                "domain '{}' has a label starting or ending with '-'",
                domain
            )));
        }

        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return Err(UrlError::Malformed(format!(
                "domain '{}' contains invalid characters",
                domain
            )));
        }
    }

    Ok(())
}
