//! Error handling for the API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The monitoring service has no accuracy data for the asset yet.
    #[error("No accuracy metrics recorded for asset {0}")]
    EmptyMetrics(String),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Whether the gateway rejected the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}
