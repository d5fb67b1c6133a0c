//! Model Gateway port
//!
//! Defines the interface for reaching a remote language model. Every call
//! carries the caller's own credential, so one gateway instance can serve
//! several domains without their secrets ever meeting.

use async_trait::async_trait;
use intel_domain::{ApiCredential, FailureKind, Model, ModelDescriptor, ModelReply};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during model gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Blocked by safety filters: {0}")]
    SafetyFiltered(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl GatewayError {
    /// Machine-readable failure class.
    ///
    /// Typed variants map directly; untyped ones fall back to inspecting the
    /// raw message.
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::InvalidCredential(_) => FailureKind::InvalidCredential,
            GatewayError::QuotaExceeded(_) => FailureKind::QuotaExceeded,
            GatewayError::SafetyFiltered(_) => FailureKind::SafetyFiltered,
            other => FailureKind::classify(&other.detail()),
        }
    }

    /// The raw human-readable message, without the variant prefix
    pub fn detail(&self) -> String {
        match self {
            GatewayError::InvalidCredential(m)
            | GatewayError::QuotaExceeded(m)
            | GatewayError::SafetyFiltered(m)
            | GatewayError::ModelNotAvailable(m)
            | GatewayError::ConnectionError(m)
            | GatewayError::RequestFailed(m) => m.clone(),
            GatewayError::Timeout(limit) => {
                format!("request timed out after {}s", limit.as_secs())
            }
        }
    }
}

/// Gateway to a remote model catalog
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// List the models visible to `credential`. May fail or be empty.
    async fn list_models(
        &self,
        credential: &ApiCredential,
    ) -> Result<Vec<ModelDescriptor>, GatewayError>;

    /// Obtain a handle bound to `credential` for one model identifier
    async fn create_model(
        &self,
        credential: &ApiCredential,
        model: &Model,
    ) -> Result<Box<dyn ModelHandle>, GatewayError>;
}

/// A usable model bound to one credential
#[async_trait]
pub trait ModelHandle: Send + Sync {
    /// Get the model behind this handle
    fn model(&self) -> &Model;

    /// Send one prompt and wait for the reply
    async fn generate(&self, prompt: &str) -> Result<ModelReply, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_variants_map_directly() {
        assert_eq!(
            GatewayError::InvalidCredential("x".into()).kind(),
            FailureKind::InvalidCredential
        );
        assert_eq!(
            GatewayError::QuotaExceeded("x".into()).kind(),
            FailureKind::QuotaExceeded
        );
        assert_eq!(
            GatewayError::SafetyFiltered("x".into()).kind(),
            FailureKind::SafetyFiltered
        );
    }

    #[test]
    fn test_untyped_variants_are_classified_from_text() {
        assert_eq!(
            GatewayError::RequestFailed("API_KEY_INVALID".into()).kind(),
            FailureKind::InvalidCredential
        );
        assert_eq!(
            GatewayError::ConnectionError("Quota reached".into()).kind(),
            FailureKind::QuotaExceeded
        );
        assert_eq!(
            GatewayError::RequestFailed("candidate blocked".into()).kind(),
            FailureKind::SafetyFiltered
        );
        assert_eq!(
            GatewayError::RequestFailed("bad gateway".into()).kind(),
            FailureKind::Unknown
        );
    }

    #[test]
    fn test_timeout_is_unknown() {
        let error = GatewayError::Timeout(Duration::from_secs(30));
        assert_eq!(error.kind(), FailureKind::Unknown);
        assert_eq!(error.detail(), "request timed out after 30s");
        assert_eq!(error.to_string(), "Request timed out after 30s");
    }
}
