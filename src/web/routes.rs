//! Route handlers.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::WebError;
use super::state::AppState;
use crate::form::{flow, FormState};

/// Render the form for the state in the query string
pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<IndexMap<String, String>>,
) -> Result<Html<String>, WebError> {
    let form = FormState::from(params);
    let html = state.renderer.render_page(&form)?;
    Ok(Html(html))
}

/// Form action: validate, maybe submit, and redirect back to the page
pub async fn submit(
    State(state): State<AppState>,
    Form(params): Form<IndexMap<String, String>>,
) -> Redirect {
    let form = FormState::from_submission(params);
    let location = flow::process(form, state.client.as_ref()).await;
    Redirect::to(&location)
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
