//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and domain
//! types by the accessors on [`FileConfig`].

use crate::gemini::client::{DEFAULT_API_VERSION, DEFAULT_BASE_URL};
use intel_application::AssistantBehavior;
use intel_domain::{CredentialKey, DomainError, DomainId, Model, ProfileCatalog, ProfileOverride};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("gateway.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("gateway.max_message_chars cannot be 0")]
    InvalidMessageLimit,

    #[error("gateway.fallback_models contains an empty model name")]
    EmptyModelName,

    #[error(transparent)]
    Profile(#[from] DomainError),
}

/// Raw `[gateway]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Service root of the Generative Language API
    pub base_url: String,
    /// API version path segment
    pub api_version: String,
    /// Bound on each gateway call, in seconds
    pub timeout_secs: u64,
    /// Models tried in order when discovery finds nothing preferred
    pub fallback_models: Vec<String>,
    /// Characters of a user message forwarded to the model
    pub max_message_chars: usize,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: 30,
            fallback_models: Model::fallback_models()
                .iter()
                .map(|m| m.to_string())
                .collect(),
            max_message_chars: 4000,
        }
    }
}

/// Raw `[domains.<id>]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDomainConfig {
    /// Environment variable holding this domain's secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_env: Option<String>,
    /// Phrases appended to the curated deny-list
    pub extra_blocked_topics: Vec<String>,
}

/// Raw `[statistics]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStatisticsConfig {
    /// SQLite URL, e.g. `sqlite:intelligence_platform.db`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

/// Raw `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily rolling diagnostic logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gateway settings
    pub gateway: FileGatewayConfig,
    /// Per-domain overrides
    pub domains: BTreeMap<DomainId, FileDomainConfig>,
    /// Statistics store
    pub statistics: FileStatisticsConfig,
    /// Logging outputs
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gateway.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.gateway.max_message_chars == 0 {
            return Err(ConfigValidationError::InvalidMessageLimit);
        }
        if self
            .gateway
            .fallback_models
            .iter()
            .any(|m| m.trim().is_empty())
        {
            return Err(ConfigValidationError::EmptyModelName);
        }

        self.catalog().validate()?;
        Ok(())
    }

    /// Per-domain overrides in domain form
    pub fn profile_overrides(&self) -> HashMap<DomainId, ProfileOverride> {
        self.domains
            .iter()
            .map(|(domain, section)| {
                (
                    *domain,
                    ProfileOverride {
                        credential_key: section
                            .credential_env
                            .as_deref()
                            .map(|k| CredentialKey::new(k.trim())),
                        extra_blocked_topics: section.extra_blocked_topics.clone(),
                    },
                )
            })
            .collect()
    }

    /// Built-in profiles with this file's overrides applied
    pub fn catalog(&self) -> ProfileCatalog {
        ProfileCatalog::with_overrides(&self.profile_overrides())
    }

    /// Limits for every domain assistant
    pub fn assistant_behavior(&self) -> AssistantBehavior {
        AssistantBehavior::default()
            .with_request_timeout(Duration::from_secs(self.gateway.timeout_secs))
            .with_max_message_chars(self.gateway.max_message_chars)
            .with_fallback_models(
                self.gateway
                    .fallback_models
                    .iter()
                    .map(|m| Model::from(m.trim()))
                    .collect(),
            )
    }
}
