//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown domain: {0} (expected one of: cybersecurity, datascience, it_operations)")]
    UnknownDomain(String),

    #[error("Credential key {key} is shared by {first} and {second}")]
    SharedCredentialKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("Credential key for {0} is empty")]
    EmptyCredentialKey(String),
}

impl DomainError {
    /// Check if this error comes from a broken credential partition
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            DomainError::SharedCredentialKey { .. } | DomainError::EmptyCredentialKey(_)
        )
    }
}
