use url::Url;

/// Derives the website name shown in place of missing authors
///
/// This is the URL's host with a leading `www.` removed. An explicit port
/// is kept so local and test servers stay distinguishable.
///
/// # Arguments
///
/// * `url` - The article URL
///
/// # Returns
///
/// The website name, or an empty string if the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use newsbrief::url::website_name;
///
/// let url = Url::parse("https://www.example.com/story").unwrap();
/// assert_eq!(website_name(&url), "example.com");
///
/// let url = Url::parse("https://News.Example.com/story").unwrap();
/// assert_eq!(website_name(&url), "news.example.com");
/// ```
pub fn website_name(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);

    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}
