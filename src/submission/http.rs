//! reqwest-backed company service client

use async_trait::async_trait;

use super::error::SubmissionError;
use super::request::{CompanyRequest, CompanyResponse, ErrorBody};
use super::CompanyClient;
use crate::config::RemoteConfig;
use crate::form::CompanyRegistration;

/// Company service client speaking JSON over HTTP
pub struct HttpCompanyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCompanyClient {
    /// Create a client for the configured service
    pub fn new(config: &RemoteConfig) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("company-registration/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.company_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompanyClient for HttpCompanyClient {
    async fn register(&self, registration: &CompanyRegistration) -> Result<String, SubmissionError> {
        let body = CompanyRequest::from(registration);
        tracing::debug!(endpoint = %self.endpoint, name = %body.name, "posting company registration");

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        if status.is_success() {
            let parsed: CompanyResponse = response
                .json()
                .await
                .map_err(|e| SubmissionError::Decode(e.to_string()))?;
            if let Some(ref service_status) = parsed.status {
                tracing::debug!(status = %service_status, "company service status");
            }
            return Ok(parsed.message);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                format!("Company service responded with status {}", status.as_u16())
            });

        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
