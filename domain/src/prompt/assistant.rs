//! Prompt composition for domain assistants

use crate::profile::DomainProfile;

/// Templates for the two assistant operations
pub struct AssistantPromptTemplate;

impl AssistantPromptTemplate {
    /// Single prompt for a chat turn.
    ///
    /// Layout: system instructions, data context (may be empty), the user's
    /// question, then a reminder of the domain boundary.
    pub fn chat_prompt(profile: &DomainProfile, data_context: &str, message: &str) -> String {
        format!(
            r#"{}

{}

User question: {}

Remember: You can ONLY answer questions related to {}.
If this question is outside your domain, politely decline and explain your restrictions."#,
            profile.system_instructions,
            data_context,
            message,
            profile.domain_id.topic_label()
        )
    }

    /// Prompt for the unprompted auto-analysis
    pub fn analysis_prompt(profile: &DomainProfile, data_context: &str) -> String {
        profile.analysis_template.render(data_context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain_id::DomainId;

    #[test]
    fn test_chat_prompt_order() {
        let profile = DomainProfile::builtin(DomainId::ItOperations);
        let prompt = AssistantPromptTemplate::chat_prompt(&profile, "TICKETS: 4", "Why so slow?");

        let system = prompt.find("Senior IT Operations Manager").unwrap();
        let data = prompt.find("TICKETS: 4").unwrap();
        let question = prompt.find("User question: Why so slow?").unwrap();
        let reminder = prompt.find("questions related to it operations").unwrap();
        assert!(system < data && data < question && question < reminder);
    }

    #[test]
    fn test_chat_prompt_without_context() {
        let profile = DomainProfile::builtin(DomainId::Cybersecurity);
        let prompt = AssistantPromptTemplate::chat_prompt(&profile, "", "What is MFA?");
        assert!(prompt.contains("User question: What is MFA?"));
        assert!(!prompt.contains("Your ONLY data source"));
    }

    #[test]
    fn test_analysis_prompt_embeds_context() {
        let profile = DomainProfile::builtin(DomainId::DataScience);
        let prompt = AssistantPromptTemplate::analysis_prompt(&profile, "Total datasets: 3");
        assert!(prompt.starts_with("As a data governance expert"));
        assert!(prompt.contains("Total datasets: 3"));
    }
}
