//! Assistant behavior: the limits every domain assistant runs under.
//!
//! These are application-layer concerns, not domain policy. They are
//! derived from the `[gateway]` section of the configuration file.

use intel_domain::Model;
use std::time::Duration;

/// Default bound on any single gateway call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on the characters of a user message forwarded to a model
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 4000;

/// Runtime limits for domain assistants.
///
/// Controls how long a gateway call may take, which models are tried when
/// discovery finds nothing preferred, and how much of a message is sent.
#[derive(Debug, Clone)]
pub struct AssistantBehavior {
    /// Maximum time to wait for a single gateway call.
    pub request_timeout: Duration,
    /// Models tried, in order, after the discovered one.
    pub fallback_models: Vec<Model>,
    /// Characters of a user message included in the prompt.
    pub max_message_chars: usize,
}

impl Default for AssistantBehavior {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            fallback_models: Model::fallback_models(),
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }
}

impl AssistantBehavior {
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.request_timeout = Duration::from_secs(seconds);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Replace the fallback list; an empty list keeps the built-in one
    pub fn with_fallback_models(mut self, models: Vec<Model>) -> Self {
        if !models.is_empty() {
            self.fallback_models = models;
        }
        self
    }

    pub fn with_max_message_chars(mut self, max: usize) -> Self {
        self.max_message_chars = max;
        self
    }

    /// Ordered, de-duplicated model candidates for configuration
    pub fn candidate_models(&self, preferred: Option<Model>) -> Vec<Model> {
        let mut candidates: Vec<Model> = Vec::new();
        for model in preferred.into_iter().chain(self.fallback_models.iter().cloned()) {
            if !candidates.contains(&model) {
                candidates.push(model);
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let behavior = AssistantBehavior::default();
        assert_eq!(behavior.request_timeout, Duration::from_secs(30));
        assert_eq!(behavior.max_message_chars, 4000);
        assert_eq!(
            behavior.fallback_models,
            vec![Model::GeminiPro, Model::Gemini10Pro, Model::Gemini10ProLatest]
        );
    }

    #[test]
    fn test_builder() {
        let behavior = AssistantBehavior::default()
            .with_timeout_seconds(5)
            .with_max_message_chars(100)
            .with_fallback_models(vec![Model::Custom("gemini-2.0-flash".into())]);

        assert_eq!(behavior.request_timeout, Duration::from_secs(5));
        assert_eq!(behavior.max_message_chars, 100);
        assert_eq!(behavior.fallback_models.len(), 1);
    }

    #[test]
    fn test_empty_fallback_list_is_ignored() {
        let behavior = AssistantBehavior::default().with_fallback_models(Vec::new());
        assert_eq!(behavior.fallback_models.len(), 3);
    }

    #[test]
    fn test_candidate_models_dedup() {
        let behavior = AssistantBehavior::default();
        assert_eq!(
            behavior.candidate_models(Some(Model::GeminiPro)),
            vec![Model::GeminiPro, Model::Gemini10Pro, Model::Gemini10ProLatest]
        );
        assert_eq!(
            behavior.candidate_models(Some(Model::Gemini15Flash))[0],
            Model::Gemini15Flash
        );
        assert_eq!(behavior.candidate_models(None).len(), 3);
    }
}
