//! Domain profiles
//!
//! A [`DomainProfile`] is the immutable data record that parameterizes one
//! domain's assistant: its credential key, persona, deny-list and canned
//! replies. The three built-in records live in [`builtin`]; the
//! [`ProfileCatalog`] holds them keyed by [`DomainId`].

mod builtin;
mod catalog;

pub use catalog::{ProfileCatalog, ProfileOverride};

use crate::core::credential::CredentialKey;
use crate::core::domain_id::DomainId;

/// Placeholder replaced by the rendered statistics in an analysis template
pub const DATA_CONTEXT_SLOT: &str = "{data_context}";

/// Prompt text for the unprompted auto-analysis operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTemplate(String);

impl AnalysisTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fill the template with a data context block
    pub fn render(&self, data_context: &str) -> String {
        self.0.replace(DATA_CONTEXT_SLOT, data_context)
    }
}

/// Immutable per-domain assistant configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainProfile {
    pub domain_id: DomainId,
    pub credential_key: CredentialKey,
    pub display_name: String,
    pub blocked_topics: Vec<String>,
    pub system_instructions: String,
    pub restricted_reply: String,
    pub analysis_template: AnalysisTemplate,
}

impl DomainProfile {
    /// The curated built-in profile for a domain
    pub fn builtin(domain: DomainId) -> Self {
        match domain {
            DomainId::Cybersecurity => builtin::cybersecurity(),
            DomainId::DataScience => builtin::datascience(),
            DomainId::ItOperations => builtin::it_operations(),
        }
    }

    /// Replace the logical credential key
    pub fn with_credential_key(mut self, key: CredentialKey) -> Self {
        self.credential_key = key;
        self
    }

    /// Append deny-list phrases, skipping blanks and duplicates
    pub fn with_extra_blocked_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for topic in topics {
            let topic = topic.into();
            let trimmed = topic.trim();
            if trimmed.is_empty() {
                continue;
            }
            let exists = self
                .blocked_topics
                .iter()
                .any(|t| t.eq_ignore_ascii_case(trimmed));
            if !exists {
                self.blocked_topics.push(trimmed.to_string());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::TopicPolicy;

    #[test]
    fn test_builtin_credential_keys_are_distinct() {
        let keys: Vec<_> = DomainId::ALL
            .iter()
            .map(|d| DomainProfile::builtin(*d).credential_key)
            .collect();
        assert_eq!(keys[0].as_str(), "GEMINI_API_KEY_CYBER");
        assert_eq!(keys[1].as_str(), "GEMINI_API_KEY_DATA");
        assert_eq!(keys[2].as_str(), "GEMINI_API_KEY_IT");
    }

    #[test]
    fn test_analysis_templates_have_data_slot() {
        for domain in DomainId::ALL {
            let profile = DomainProfile::builtin(domain);
            assert!(profile.analysis_template.as_str().contains(DATA_CONTEXT_SLOT));
            let rendered = profile.analysis_template.render("STATS");
            assert!(rendered.contains("STATS"));
            assert!(!rendered.contains(DATA_CONTEXT_SLOT));
        }
    }

    #[test]
    fn test_deny_lists_do_not_block_own_core_vocabulary() {
        let own = [
            (DomainId::Cybersecurity, "How do I triage a phishing report?"),
            (DomainId::DataScience, "Which file formats suit large datasets?"),
            (DomainId::ItOperations, "How can we shorten ticket queues?"),
        ];
        for (domain, message) in own {
            let profile = DomainProfile::builtin(domain);
            assert!(TopicPolicy::is_on_topic(&profile, message), "{domain}");
        }
    }

    #[test]
    fn test_deny_lists_cover_other_domains() {
        let cyber = DomainProfile::builtin(DomainId::Cybersecurity);
        let data = DomainProfile::builtin(DomainId::DataScience);
        let it = DomainProfile::builtin(DomainId::ItOperations);

        assert!(!TopicPolicy::is_on_topic(&cyber, "Explain our data governance"));
        assert!(!TopicPolicy::is_on_topic(&cyber, "Who runs the service desk?"));
        assert!(!TopicPolicy::is_on_topic(&data, "Was that malware?"));
        assert!(!TopicPolicy::is_on_topic(&data, "Check SLA compliance"));
        assert!(!TopicPolicy::is_on_topic(&it, "Any ransomware today?"));
        assert!(!TopicPolicy::is_on_topic(&it, "Tell me about data science"));
    }

    #[test]
    fn test_extra_blocked_topics_skip_duplicates_and_blanks() {
        let base = DomainProfile::builtin(DomainId::ItOperations);
        let before = base.blocked_topics.len();
        let profile = base.with_extra_blocked_topics(["PHISHING", "  ", "crypto mining"]);
        assert_eq!(profile.blocked_topics.len(), before + 1);
        assert_eq!(profile.blocked_topics.last().unwrap(), "crypto mining");
    }
}
