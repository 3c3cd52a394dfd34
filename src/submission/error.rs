//! Errors from the company service call

use thiserror::Error;

/// Fallback text when an error carries no message of its own
pub const GENERIC_FAILURE: &str = "Internal server error, try again later";

/// Errors that can occur while submitting a registration
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Network failure, TLS error, or an unusable client configuration
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The service answered 2xx but the body could not be read
    #[error("Invalid response from company service: {0}")]
    Decode(String),
}

impl SubmissionError {
    /// HTTP status reported by the service, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::Rejected { status, .. } => Some(*status),
            SubmissionError::Transport(e) => e.status().map(|s| s.as_u16()),
            SubmissionError::Decode(_) => None,
        }
    }

    /// Text shown to the user, never empty
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}
