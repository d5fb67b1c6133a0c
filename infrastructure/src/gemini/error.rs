//! Error types for the Gemini adapter

use intel_application::ports::model_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        /// Canonical status such as `RESOURCE_EXHAUSTED`
        code: Option<String>,
        /// First `details[].reason`, e.g. `API_KEY_INVALID`
        reason: Option<String>,
        message: String,
    },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

impl From<GeminiError> for GatewayError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::Http(e) => GatewayError::ConnectionError(e.without_url().to_string()),
            GeminiError::Api {
                status,
                code,
                reason,
                message,
            } => {
                let invalid_key = reason.as_deref() == Some("API_KEY_INVALID")
                    || message.contains("API key not valid");
                if invalid_key {
                    GatewayError::InvalidCredential(message)
                } else if status == 429 || code.as_deref() == Some("RESOURCE_EXHAUSTED") {
                    GatewayError::QuotaExceeded(message)
                } else if status == 404 {
                    GatewayError::ModelNotAvailable(message)
                } else {
                    GatewayError::RequestFailed(format!("{} {}", status, message))
                }
            }
            GeminiError::Blocked(reason) => GatewayError::SafetyFiltered(format!(
                "response blocked by safety filters ({})",
                reason
            )),
            GeminiError::ParseError { error, .. } => GatewayError::RequestFailed(error),
        }
    }
}
