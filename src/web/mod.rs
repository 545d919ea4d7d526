//! Web front end
//!
//! A single route, `/`, serves the submission form (GET) and processes
//! submissions (POST). Failures redirect back to the form with a flash
//! message; successes render the result directly.

mod flash;
mod handlers;
mod render;

pub use flash::{set_flash, signing_key, take_flash, FLASH_COOKIE};
pub use render::{escape_html, render_page};

use crate::article::build_http_client;
use crate::config::{Config, ServerConfig};
use crate::nlp::{prepare_lexicon, SentimentAnalyzer};
use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::Key;
use reqwest::Client;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by all requests; read-only
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub analyzer: Arc<SentimentAnalyzer>,
    pub key: Key,
}

impl AppState {
    pub fn new(client: Client, analyzer: SentimentAnalyzer, secret_key: &str) -> Self {
        Self {
            client,
            analyzer: Arc::new(analyzer),
            key: signing_key(secret_key),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Builds the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::show_form).post(handlers::submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the process exits
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state)).await
}

/// Runs the application
///
/// This is the main entry point after configuration. It will:
/// 1. Build the HTTP client
/// 2. Ensure the sentiment lexicon is cached locally and load it
/// 3. Serve the web front end
///
/// Failing to prepare the lexicon aborts startup.
pub async fn run(config: Config) -> crate::Result<()> {
    let client = build_http_client(&config.fetch)?;

    let lexicon = prepare_lexicon(&client, &config.nlp).await?;

    let state = AppState::new(
        client,
        SentimentAnalyzer::new(lexicon),
        &config.server.secret_key,
    );

    serve(&config.server, state).await?;
    Ok(())
}
