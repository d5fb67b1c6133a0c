//! Credential source port
//!
//! Resolves a domain's logical credential key to its secret. A missing key
//! is a normal outcome, not an error.

use intel_domain::{ApiCredential, CredentialKey};
use std::collections::HashMap;

/// Lookup of per-domain secrets
pub trait CredentialSource: Send + Sync {
    /// Resolve `key`, returning `None` when it is unset or blank
    fn lookup(&self, key: &CredentialKey) -> Option<ApiCredential>;
}

/// Fixed in-memory credentials, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    secrets: HashMap<String, ApiCredential>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret; blank secrets are ignored
    pub fn with(mut self, key: &str, secret: &str) -> Self {
        if let Some(credential) = ApiCredential::new(secret) {
            self.secrets.insert(key.to_string(), credential);
        }
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn lookup(&self, key: &CredentialKey) -> Option<ApiCredential> {
        self.secrets.get(key.as_str()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        let source = StaticCredentials::new()
            .with("GEMINI_API_KEY_IT", "it-secret")
            .with("GEMINI_API_KEY_DATA", " ");
        assert_eq!(
            source
                .lookup(&CredentialKey::new("GEMINI_API_KEY_IT"))
                .map(|c| c.expose().to_string()),
            Some("it-secret".to_string())
        );
        assert!(source.lookup(&CredentialKey::new("GEMINI_API_KEY_DATA")).is_none());
        assert!(source.lookup(&CredentialKey::new("GEMINI_API_KEY_CYBER")).is_none());
    }
}
