use newsbrief::article::build_http_client;
use newsbrief::config::FetchConfig;
use newsbrief::nlp::{Lexicon, SentimentAnalyzer};
use reqwest::Client;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Harbor Festival Draws Crowds | Example News</title>
    <meta property="og:title" content="Harbor Festival Draws Crowds">
    <meta name="author" content="Jane Doe">
    <meta property="article:published_time" content="2024-06-15T09:30:00Z">
    <meta property="og:image" content="/images/festival.jpg">
</head>
<body>
    <nav><p>Home | World | Sports</p></nav>
    <article>
        <h1>Harbor Festival Draws Crowds</h1>
        <p>Thousands gathered at the harbor on Saturday. The weather was wonderful.</p>
        <p>Vendors reported great sales. Children enjoyed the boat parade. Music played late.</p>
        <p>Organizers plan to return next year.</p>
    </article>
</body>
</html>"#;

pub fn analyzer() -> SentimentAnalyzer {
    SentimentAnalyzer::new(Lexicon::from_entries([
        ("wonderful", 2.7),
        ("great", 3.1),
        ("enjoyed", 2.3),
        ("terrible", -2.1),
        ("collapsed", -1.8),
    ]))
}

pub fn client() -> Client {
    build_http_client(&FetchConfig::default()).expect("client should build")
}

/// Serves `body` as HTML at `route`, expecting exactly `times` requests
pub async fn mount_html(server: &MockServer, route: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html"))
        .expect(times)
        .mount(server)
        .await;
}

pub fn page_url(server: &MockServer, route: &str) -> String {
    format!("{}{}", server.uri(), route)
}
