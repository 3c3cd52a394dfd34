//! Page handler errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that can occur while serving the form page
#[derive(Debug, Error)]
pub enum WebError {
    /// A template failed to compile at startup
    #[error("Failed to load templates: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
    /// A template failed to render
    #[error("Failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl From<handlebars::TemplateError> for WebError {
    fn from(err: handlebars::TemplateError) -> Self {
        WebError::Template(Box::new(err))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong while rendering this page. Please try again.",
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_render_error_response() {
        let error = WebError::Render(handlebars::RenderError::from(
            handlebars::RenderErrorReason::Other("boom".to_string()),
        ));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Something went wrong"));
        assert!(!text.contains("boom"));
    }
}
