//! HTTP surface of the registration form.
//!
//! A single page at `/`: `GET` renders the form from its query string and
//! `POST` is the form action, which always answers with a redirect back to
//! `/`.

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod view;

pub use error::WebError;
pub use render::Renderer;
pub use state::AppState;

/// Build the router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::page).post(routes::submit))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server and run until Ctrl-C
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr()?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Registration form listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_build_router() {
        let state = AppState::new(Config::default()).unwrap();
        let _router = build_router(state);
        // Router builds without panicking
    }
}
