use crate::common::{analyzer, client, mount_html, page_url, ARTICLE_HTML};
use newsbrief::article::MAX_BODY_BYTES;
use newsbrief::nlp::Sentiment;
use newsbrief::workflow::{analyze, FailureKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Answers the first request with `first` and every later one with `rest`
struct Sequence {
    calls: Arc<AtomicUsize>,
    first: ResponseTemplate,
    rest: ResponseTemplate,
}

impl Respond for Sequence {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.first.clone()
        } else {
            self.rest.clone()
        }
    }
}

fn sequence(first: ResponseTemplate, rest: ResponseTemplate) -> Sequence {
    Sequence {
        calls: Arc::new(AtomicUsize::new(0)),
        first,
        rest,
    }
}

#[tokio::test]
async fn test_full_article_workflow() {
    let mock_server = MockServer::start().await;
    // Probe and download each fetch the page
    mount_html(&mock_server, "/news/festival", ARTICLE_HTML, 2).await;

    let url = page_url(&mock_server, "/news/festival");
    let result = analyze(&client(), &analyzer(), &url)
        .await
        .expect("workflow should succeed");

    assert_eq!(result.title, "Harbor Festival Draws Crowds");
    assert_eq!(result.authors, "Jane Doe");
    assert_eq!(result.publish_date, "June 15, 2024");
    assert_eq!(
        result.summary,
        "Thousands gathered at the harbor on Saturday. The weather was wonderful. \
         Vendors reported great sales. Children enjoyed the boat parade. Music played late"
    );
    assert_eq!(
        result.top_image,
        Some(format!("{}/images/festival.jpg", mock_server.uri()))
    );
    assert_eq!(result.sentiment, Sentiment::Happy);
    assert!(result.keywords.contains(&"harbor".to_string()));
    assert!(!result.text.contains("Home | World"));
}

#[tokio::test]
async fn test_missing_metadata_defaults() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/plain",
        "<html><body><p>The committee met on Tuesday and adjourned</p></body></html>",
        2,
    )
    .await;

    let url = page_url(&mock_server, "/plain");
    let result = analyze(&client(), &analyzer(), &url).await.unwrap();

    let host = url::Url::parse(&url).unwrap();
    assert_eq!(result.title, "Untitled");
    assert_eq!(
        result.authors,
        format!("127.0.0.1:{}", host.port().unwrap())
    );
    assert_eq!(result.publish_date, "N/A");
    assert_eq!(result.top_image, None);
    assert_eq!(result.sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn test_invalid_url_makes_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    for input in ["", "not a url", "example.com/story", "ftp://example.com/a"] {
        let error = analyze(&client(), &analyzer(), input).await.unwrap_err();
        assert_eq!(error.kind(), FailureKind::InvalidUrl, "input: {:?}", input);
    }
}

#[tokio::test]
async fn test_non_html_rejected_without_extraction() {
    let mock_server = MockServer::start().await;
    // Only the probe may reach the server
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"a\": 1}", "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = page_url(&mock_server, "/data.json");
    let error = analyze(&client(), &analyzer(), &url).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::NotHtml);
    assert_eq!(
        error.user_message(),
        "URL does not appear to be an HTML article."
    );
}

#[tokio::test]
async fn test_error_status_is_unreachable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = page_url(&mock_server, "/down");
    let error = analyze(&client(), &analyzer(), &url).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::Unreachable);
    assert_eq!(
        error.user_message(),
        "Failed to download the content of the URL. Try another link or check the URL."
    );
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    let error = analyze(&client(), &analyzer(), "http://127.0.0.1:9/story")
        .await
        .unwrap_err();

    assert_eq!(error.kind(), FailureKind::Unreachable);
    assert_eq!(
        error.user_message(),
        "Failed to download the content of the URL. Try another link or check the URL."
    );
}

#[tokio::test]
async fn test_download_failure_after_probe() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(sequence(
            ResponseTemplate::new(200).set_body_raw(ARTICLE_HTML, "text/html"),
            ResponseTemplate::new(500),
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    let url = page_url(&mock_server, "/flaky");
    let error = analyze(&client(), &analyzer(), &url).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::DownloadFailed);
    assert_eq!(
        error.user_message(),
        "Failed to download article content. Try another URL."
    );
}

#[tokio::test]
async fn test_oversize_article_is_download_failure() {
    let mock_server = MockServer::start().await;
    let page = format!(
        "<html><body><article><p>{}</p></article></body></html>",
        "word ".repeat(MAX_BODY_BYTES / 4)
    );
    mount_html(&mock_server, "/huge", &page, 2).await;

    let url = page_url(&mock_server, "/huge");
    let error = analyze(&client(), &analyzer(), &url).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::DownloadFailed);
}

#[tokio::test]
async fn test_blank_download_not_retrieved() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/blank", "   \n", 2).await;

    let url = page_url(&mock_server, "/blank");
    let error = analyze(&client(), &analyzer(), &url).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::NotRetrieved);
    assert_eq!(
        error.user_message(),
        "Could not retrieve the article content. Try a different URL."
    );
}

#[tokio::test]
async fn test_markup_free_body_fails_parsing() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/text", "plain words pretending to be a page", 2).await;

    let url = page_url(&mock_server, "/text");
    let error = analyze(&client(), &analyzer(), &url).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::ParseFailed);
    assert_eq!(error.user_message(), "Article parsing failed. Try another URL.");
}

#[tokio::test]
async fn test_empty_text_rejected_despite_metadata() {
    let mock_server = MockServer::start().await;
    mount_html(
        &mock_server,
        "/video",
        r#"<html><head><title>Watch: Launch</title><meta name="author" content="Jane Doe"></head>
           <body><article><p>   </p><video src="/launch.mp4"></video></article></body></html>"#,
        2,
    )
    .await;

    let url = page_url(&mock_server, "/video");
    let error = analyze(&client(), &analyzer(), &url).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::EmptyText);
    assert_eq!(
        error.user_message(),
        "Article text is empty or could not be extracted. Try another link."
    );
}
