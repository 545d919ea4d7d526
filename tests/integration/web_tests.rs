use crate::common::{analyzer, client, mount_html, page_url, ARTICLE_HTML};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use newsbrief::web::{build_router, AppState};
use tower::ServiceExt;
use wiremock::MockServer;

fn app() -> Router {
    build_router(AppState::new(client(), analyzer(), "integration-secret"))
}

fn form_request(url: &str) -> Request<Body> {
    let body = format!("url={}", urlencode(url));
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn urlencode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Extracts the `name=value` part of the first Set-Cookie header
fn set_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_get_renders_form() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<form method=\"post\" action=\"/\">"));
    assert!(!html.contains("class=\"flash\""));
    assert!(!html.contains("class=\"result\""));
}

#[tokio::test]
async fn test_post_success_renders_result() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/news/festival", ARTICLE_HTML, 2).await;

    let response = app()
        .oneshot(form_request(&page_url(&mock_server, "/news/festival")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h2>Harbor Festival Draws Crowds</h2>"));
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("June 15, 2024"));
    assert!(html.contains("happy 😊"));
    assert!(html.contains("festival.jpg"));
    assert!(html.contains("<footer>Generated "));
}

#[tokio::test]
async fn test_post_failure_redirects_with_flash() {
    let app = app();

    let response = app
        .clone()
        .oneshot(form_request("  definitely not a url  "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    let cookie = set_cookie(&response);
    assert!(body_text(response).await.is_empty());

    // Following the redirect shows the message once
    let response = app
        .clone()
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());
    let html = body_text(response).await;
    assert!(html.contains("Please enter a valid URL (include http/https)."));
    assert!(!html.contains("class=\"result\""));
}

#[tokio::test]
async fn test_tampered_flash_cookie_ignored() {
    let response = app()
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, "newsbrief_flash=not-html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(!html.contains("class=\"flash\""));
}

#[tokio::test]
async fn test_post_without_url_field_is_invalid() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("other=1"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_post_without_form_body_redirects_with_flash() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    let cookie = set_cookie(&response);

    let response = app
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Please enter a valid URL (include http/https)."));
}
