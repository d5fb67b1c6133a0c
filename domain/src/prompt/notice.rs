//! User-facing notices returned instead of model output.
//!
//! Every degraded path of an assistant ends in one of these texts; none of
//! them ever includes a secret value.

use crate::profile::DomainProfile;
use crate::reply::FailureKind;

/// Which assistant operation a notice is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantOperation {
    Chat,
    Analysis,
}

/// Display texts for unconfigured assistants, empty replies and failures
pub struct AssistantNotice;

impl AssistantNotice {
    /// Instructions naming the missing credential's logical key
    pub fn not_configured(profile: &DomainProfile, operation: AssistantOperation) -> String {
        let key = &profile.credential_key;
        match operation {
            AssistantOperation::Chat => format!(
                r#"**{} Not Configured**

To enable this AI assistant, please:
1. Get a Gemini API key from Google AI Studio (https://aistudio.google.com/app/apikey)
2. Add it to your `.env` file: `{}=your_api_key_here`
3. Restart the application

Each domain requires its own separate API key."#,
                profile.display_name, key
            ),
            AssistantOperation::Analysis => format!(
                "{} is not configured. Set {} in your .env file.",
                profile.display_name, key
            ),
        }
    }

    /// The gateway answered but produced no extractable text
    pub fn empty_response(operation: AssistantOperation) -> String {
        match operation {
            AssistantOperation::Chat => {
                "The AI could not generate a response. Please try rephrasing your question."
                    .to_string()
            }
            AssistantOperation::Analysis => {
                "The AI could not generate an analysis. Please try again.".to_string()
            }
        }
    }

    /// User-safe message for a classified gateway failure
    pub fn failure(
        profile: &DomainProfile,
        operation: AssistantOperation,
        kind: FailureKind,
        raw_message: &str,
    ) -> String {
        let name = &profile.display_name;
        match (kind, operation) {
            (FailureKind::InvalidCredential, _) => format!(
                "**Invalid API key** for {}. Please check `{}` in your `.env` file.",
                name, profile.credential_key
            ),
            (FailureKind::QuotaExceeded, _) => {
                format!("**API quota exceeded** for {}. Please try again later.", name)
            }
            (FailureKind::SafetyFiltered, AssistantOperation::Chat) => {
                "The response was blocked by safety filters. Please try a different question."
                    .to_string()
            }
            (FailureKind::SafetyFiltered, AssistantOperation::Analysis) => {
                "The response was blocked by safety filters. Please try again.".to_string()
            }
            (FailureKind::Unknown, AssistantOperation::Chat) => {
                format!("Error communicating with {}: {}", name, raw_message)
            }
            (FailureKind::Unknown, AssistantOperation::Analysis) => {
                format!("Error analyzing data with {}: {}", name, raw_message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain_id::DomainId;

    #[test]
    fn test_not_configured_names_key_for_both_operations() {
        let profile = DomainProfile::builtin(DomainId::Cybersecurity);
        for op in [AssistantOperation::Chat, AssistantOperation::Analysis] {
            let text = AssistantNotice::not_configured(&profile, op);
            assert!(text.contains("GEMINI_API_KEY_CYBER"));
            assert!(text.contains("Cybersecurity Analyst AI"));
        }
    }

    #[test]
    fn test_failure_messages() {
        let profile = DomainProfile::builtin(DomainId::ItOperations);
        let chat = AssistantOperation::Chat;

        let invalid = AssistantNotice::failure(&profile, chat, FailureKind::InvalidCredential, "x");
        assert!(invalid.contains("Invalid API key"));
        assert!(invalid.contains("IT Operations AI"));

        let quota = AssistantNotice::failure(&profile, chat, FailureKind::QuotaExceeded, "x");
        assert!(quota.contains("quota exceeded"));

        let blocked = AssistantNotice::failure(&profile, chat, FailureKind::SafetyFiltered, "x");
        assert!(blocked.contains("safety filters"));

        let other = AssistantNotice::failure(&profile, chat, FailureKind::Unknown, "socket hang up");
        assert_eq!(other, "Error communicating with IT Operations AI: socket hang up");
    }

    #[test]
    fn test_empty_response_differs_per_operation() {
        assert!(AssistantNotice::empty_response(AssistantOperation::Chat).contains("rephrasing"));
        assert!(AssistantNotice::empty_response(AssistantOperation::Analysis).contains("analysis"));
    }
}
