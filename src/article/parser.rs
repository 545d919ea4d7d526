//! HTML parser for extracting article fields
//!
//! This module handles parsing a downloaded page to extract:
//! - Title
//! - Authors
//! - Publish date
//! - Main body text
//! - Top image

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// Fields extracted from an article page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFields {
    /// The article title
    pub title: Option<String>,

    /// Author names, in document order, without duplicates
    pub authors: Vec<String>,

    /// Publication date
    pub publish_date: Option<NaiveDate>,

    /// Body text, paragraphs separated by blank lines
    pub text: String,

    /// Representative image (absolute URL)
    pub top_image: Option<String>,
}

/// Article parsing errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Document contains no markup")]
    NoMarkup,
}

/// Elements the HTML parser synthesises even for markup-free input
const IMPLICIT_ELEMENTS: &[&str] = &["html", "head", "body"];

/// Containers searched for body paragraphs, most specific first
const TEXT_SCOPES: &[&str] = &["article p", "main p", "p"];

/// Parses a downloaded page into article fields
///
/// # Arguments
///
/// * `html` - The page body
/// * `base_url` - The page URL, used to resolve relative image links
///
/// # Returns
///
/// * `Ok(ArticleFields)` - Successfully parsed page (fields may be empty)
/// * `Err(ParseError)` - The body is not an HTML document
///
/// # Example
///
/// ```
/// use newsbrief::article::parse_article;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><article><p>Body.</p></article></body></html>"#;
/// let base_url = Url::parse("https://example.com/story").unwrap();
/// let fields = parse_article(html, &base_url).unwrap();
/// assert_eq!(fields.title, Some("Test".to_string()));
/// assert_eq!(fields.text, "Body.");
/// ```
pub fn parse_article(html: &str, base_url: &Url) -> Result<ArticleFields, ParseError> {
    let document = Html::parse_document(html);

    if !has_markup(&document) {
        return Err(ParseError::NoMarkup);
    }

    let json_ld = collect_json_ld(&document);

    Ok(ArticleFields {
        title: extract_title(&document),
        authors: extract_authors(&document, &json_ld),
        publish_date: extract_publish_date(&document, &json_ld),
        text: extract_text(&document),
        top_image: extract_top_image(&document, base_url),
    })
}

fn has_markup(document: &Html) -> bool {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .any(|element| !IMPLICIT_ELEMENTS.contains(&element.value().name()))
}

/// Collapses runs of whitespace into single spaces and trims
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(element: &ElementRef) -> String {
    clean_text(&element.text().collect::<String>())
}

/// Returns the `content` of the first `<meta>` whose property, name, or
/// itemprop matches one of `keys` (case-insensitive), trying keys in order
fn meta_content(document: &Html, keys: &[&str]) -> Option<String> {
    let selector = Selector::parse("meta[content]").ok()?;

    keys.iter().find_map(|key| {
        document.select(&selector).find_map(|element| {
            let meta = element.value();
            let matched = ["property", "name", "itemprop"].iter().any(|attr| {
                meta.attr(attr)
                    .is_some_and(|value| value.eq_ignore_ascii_case(key))
            });

            if !matched {
                return None;
            }

            meta.attr("content")
                .map(clean_text)
                .filter(|content| !content.is_empty())
        })
    })
}

/// Extracts the article title
///
/// Order: `og:title`, `twitter:title`, `<title>`, first `<h1>`.
fn extract_title(document: &Html) -> Option<String> {
    if let Some(title) = meta_content(document, &["og:title", "twitter:title"]) {
        return Some(title);
    }

    ["title", "h1"].iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        document
            .select(&selector)
            .next()
            .map(|element| element_text(&element))
            .filter(|s| !s.is_empty())
    })
}

/// Parses every JSON-LD block, flattening arrays and `@graph` lists
fn collect_json_ld(document: &Html) -> Vec<serde_json::Value> {
    let mut nodes = Vec::new();

    let Ok(selector) = Selector::parse("script[type='application/ld+json']") else {
        return nodes;
    };

    for script in document.select(&selector) {
        let raw = script.text().collect::<String>();
        let Ok(json) = serde_json::from_str::<serde_json::Value>(raw.trim()) else {
            tracing::debug!("Ignoring unparseable JSON-LD block");
            continue;
        };
        flatten_json_ld(json, &mut nodes);
    }

    nodes
}

fn flatten_json_ld(value: serde_json::Value, nodes: &mut Vec<serde_json::Value>) {
    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                flatten_json_ld(item, nodes);
            }
        }
        serde_json::Value::Object(mut object) => {
            if let Some(graph) = object.remove("@graph") {
                flatten_json_ld(graph, nodes);
            }
            nodes.push(serde_json::Value::Object(object));
        }
        _ => {}
    }
}

/// Extracts author names from meta tags, JSON-LD and author markup
fn extract_authors(document: &Html, json_ld: &[serde_json::Value]) -> Vec<String> {
    let mut candidates = Vec::new();

    if let Ok(selector) = Selector::parse("meta[content]") {
        for element in document.select(&selector) {
            let meta = element.value();
            let is_author = meta
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("author"))
                || meta
                    .attr("property")
                    .is_some_and(|property| property.eq_ignore_ascii_case("article:author"));

            if let (true, Some(content)) = (is_author, meta.attr("content")) {
                // article:author is frequently a profile URL
                if !content.starts_with("http://") && !content.starts_with("https://") {
                    candidates.push(content.to_string());
                }
            }
        }
    }

    for node in json_ld {
        if let Some(author) = node.get("author") {
            collect_json_ld_names(author, &mut candidates);
        }
    }

    if let Ok(selector) = Selector::parse("[rel~='author'], [itemprop~='author']") {
        for element in document.select(&selector) {
            candidates.push(element_text(&element));
        }
    }

    let mut authors: Vec<String> = Vec::new();
    for candidate in candidates {
        let name = strip_byline(&clean_text(&candidate));
        if name.is_empty() {
            continue;
        }
        if !authors.iter().any(|known| known.eq_ignore_ascii_case(&name)) {
            authors.push(name);
        }
    }

    authors
}

fn collect_json_ld_names(author: &serde_json::Value, names: &mut Vec<String>) {
    match author {
        serde_json::Value::String(name) => names.push(name.clone()),
        serde_json::Value::Object(object) => {
            if let Some(name) = object.get("name").and_then(|n| n.as_str()) {
                names.push(name.to_string());
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_json_ld_names(item, names);
            }
        }
        _ => {}
    }
}

/// Removes a leading "By " from a byline
fn strip_byline(name: &str) -> String {
    match name.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("by ") => name[3..].trim().to_string(),
        _ => name.to_string(),
    }
}

/// Extracts the publication date
fn extract_publish_date(document: &Html, json_ld: &[serde_json::Value]) -> Option<NaiveDate> {
    let mut candidates: Vec<String> = Vec::new();

    if let Some(value) = meta_content(
        document,
        &["article:published_time", "datePublished", "date"],
    ) {
        candidates.push(value);
    }

    candidates.extend(
        json_ld
            .iter()
            .filter_map(|node| node.get("datePublished").and_then(|d| d.as_str()))
            .map(str::to_string),
    );

    if let Ok(selector) = Selector::parse("time[datetime]") {
        candidates.extend(
            document
                .select(&selector)
                .filter_map(|element| element.value().attr("datetime"))
                .map(str::to_string),
        );
    }

    candidates.iter().find_map(|value| parse_date(value))
}

/// Parses the date formats found in article metadata
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, and anything starting with
/// `YYYY-MM-DD`.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }

    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Extracts the body text from paragraphs
///
/// Paragraphs are taken from the first of `article`, `main`, or the whole
/// document that yields any text.
fn extract_text(document: &Html) -> String {
    for scope in TEXT_SCOPES {
        let Ok(selector) = Selector::parse(scope) else {
            continue;
        };

        let paragraphs: Vec<String> = document
            .select(&selector)
            .map(|element| element_text(&element))
            .filter(|text| !text.is_empty())
            .collect();

        if !paragraphs.is_empty() {
            return paragraphs.join("\n\n").trim().to_string();
        }
    }

    String::new()
}

/// Extracts the representative image
///
/// Order: `og:image`, `twitter:image`, first `<img src>` inside `<article>`.
fn extract_top_image(document: &Html, base_url: &Url) -> Option<String> {
    let from_meta = meta_content(document, &["og:image", "twitter:image"]);

    let from_article = || {
        let selector = Selector::parse("article img[src]").ok()?;
        document
            .select(&selector)
            .filter_map(|element| element.value().attr("src"))
            .map(str::to_string)
            .next()
    };

    from_meta
        .or_else(from_article)
        .and_then(|src| resolve_image(&src, base_url))
}

/// Resolves an image reference to an absolute HTTP(S) URL
fn resolve_image(src: &str, base_url: &Url) -> Option<String> {
    let src = src.trim();
    if src.is_empty() || src.starts_with("data:") {
        return None;
    }

    match base_url.join(src) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url.to_string())
        }
        _ => None,
    }
}
