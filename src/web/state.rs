//! Shared state for the web server.

use std::sync::Arc;

use anyhow::{Context, Result};

use super::render::Renderer;
use crate::config::Config;
use crate::submission::{CompanyClient, HttpCompanyClient};

/// Read-only state shared by all requests
#[derive(Clone)]
pub struct AppState {
    /// Company service client used by the final step
    pub client: Arc<dyn CompanyClient>,
    /// Compiled page templates
    pub renderer: Arc<Renderer>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create state talking to the configured company service
    pub fn new(config: Config) -> Result<Self> {
        let client = HttpCompanyClient::new(&config.remote)
            .context("Failed to build company service client")?;
        tracing::info!(endpoint = %client.endpoint(), "company service configured");
        Self::with_client(config, Arc::new(client))
    }

    /// Create state with a specific company client
    pub fn with_client(config: Config, client: Arc<dyn CompanyClient>) -> Result<Self> {
        let renderer = Renderer::new().context("Failed to compile page templates")?;
        Ok(Self {
            client,
            renderer: Arc::new(renderer),
            config: Arc::new(config),
        })
    }
}
