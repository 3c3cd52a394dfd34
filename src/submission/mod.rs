//! Submission of completed registrations to the remote company service.
//!
//! The service is an opaque HTTP endpoint that accepts one JSON document per
//! registration. A submission is a single best-effort attempt: there are no
//! retries and no timeout, and whatever happens is reduced to a
//! [`SubmissionOutcome`] shown on the review step.

mod error;
mod http;
mod request;

pub use error::{SubmissionError, GENERIC_FAILURE};
pub use http::HttpCompanyClient;
pub use request::{international_phone, AddressBody, CompanyRequest, CompanyResponse, ContactBody};

use async_trait::async_trait;

use crate::form::CompanyRegistration;

/// Client for the company registration service
#[async_trait]
pub trait CompanyClient: Send + Sync {
    /// Submit a registration, returning the service's message on success
    async fn register(&self, registration: &CompanyRegistration) -> Result<String, SubmissionError>;
}

/// Whether the final submission went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Success,
    Error,
}

impl SubmissionStatus {
    /// Value of the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "success" => Some(SubmissionStatus::Success),
            "error" => Some(SubmissionStatus::Error),
            _ => None,
        }
    }
}

/// Status and message reported back to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub status: SubmissionStatus,
    pub message: String,
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }
}

impl From<Result<String, SubmissionError>> for SubmissionOutcome {
    fn from(result: Result<String, SubmissionError>) -> Self {
        match result {
            Ok(message) => SubmissionOutcome::success(message),
            Err(e) => SubmissionOutcome::error(e.user_message()),
        }
    }
}

/// Submit a registration and reduce the result to an outcome
pub async fn submit(client: &dyn CompanyClient, registration: &CompanyRegistration) -> SubmissionOutcome {
    let result = client.register(registration).await;
    match &result {
        Ok(message) => tracing::info!(message = %message, "company registration accepted"),
        Err(e) => tracing::warn!(
            error = %e,
            status = ?e.status(),
            "company registration failed"
        ),
    }
    SubmissionOutcome::from(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_params() {
        assert_eq!(SubmissionStatus::Success.as_str(), "success");
        assert_eq!(
            SubmissionStatus::from_param("error"),
            Some(SubmissionStatus::Error)
        );
        assert_eq!(SubmissionStatus::from_param("In Progress"), None);
    }

    #[test]
    fn test_outcome_from_result() {
        let ok = SubmissionOutcome::from(Ok("Created".to_string()));
        assert!(ok.is_success());
        assert_eq!(ok.message, "Created");

        let err = SubmissionOutcome::from(Err(SubmissionError::Rejected {
            status: 500,
            message: String::new(),
        }));
        assert_eq!(err.status, SubmissionStatus::Error);
        assert_eq!(err.message, GENERIC_FAILURE);
    }
}
