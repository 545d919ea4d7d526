//! Route handlers for `/`

use crate::web::flash::{set_flash, take_flash};
use crate::web::render::render_page;
use crate::web::AppState;
use crate::workflow;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use chrono::Local;
use serde::Deserialize;

/// The submission form
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub url: String,
}

/// GET `/`: the form, with any pending flash message
pub async fn show_form(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, message) = take_flash(jar);
    (jar, Html(render_page(message, None, Local::now())))
}

/// POST `/`: run the workflow, then render the result or redirect back with a message
pub async fn submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    form: Option<Form<SubmitForm>>,
) -> Response {
    // A body that is not a form counts as an empty submission
    let url = form.map(|Form(form)| form.url).unwrap_or_default();
    let raw = url.trim();

    match workflow::analyze(&state.client, &state.analyzer, raw).await {
        Ok(result) => {
            tracing::info!("Rendered summary for {}", raw);
            Html(render_page(None, Some(&result), Local::now())).into_response()
        }
        Err(e) => {
            tracing::info!("Submission rejected: {}", e);
            (set_flash(jar, e.kind()), Redirect::to("/")).into_response()
        }
    }
}
