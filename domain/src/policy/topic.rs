//! Deny-list topic policy

use crate::profile::DomainProfile;

/// Case-insensitive deny-list matcher
///
/// Only an explicit blocked phrase rejects a message; every other message,
/// including small talk and empty input, is allowed through.
pub struct TopicPolicy;

impl TopicPolicy {
    /// Returns `true` when `message` contains none of the profile's blocked phrases
    pub fn is_on_topic(profile: &DomainProfile, message: &str) -> bool {
        Self::blocked_phrase(profile, message).is_none()
    }

    /// The first blocked phrase found in `message`, if any
    pub fn blocked_phrase<'p>(profile: &'p DomainProfile, message: &str) -> Option<&'p str> {
        if message.trim().is_empty() {
            return None;
        }
        let haystack = message.to_lowercase();
        profile
            .blocked_topics
            .iter()
            .find(|phrase| !phrase.is_empty() && haystack.contains(&phrase.to_lowercase()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain_id::DomainId;

    fn profile_with(topics: &[&str]) -> DomainProfile {
        let mut profile = DomainProfile::builtin(DomainId::DataScience);
        profile.blocked_topics = topics.iter().map(|t| t.to_string()).collect();
        profile
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let profile = profile_with(&["phishing"]);
        assert!(!TopicPolicy::is_on_topic(&profile, "PHISHING"));
        assert!(!TopicPolicy::is_on_topic(&profile, "phishing"));
        assert!(!TopicPolicy::is_on_topic(&profile, "Any PhIsHiNg lately?"));
    }

    #[test]
    fn test_mixed_case_phrase_matches_lowercase_message() {
        let profile = profile_with(&["SLA compliance"]);
        assert!(!TopicPolicy::is_on_topic(&profile, "what is our sla compliance rate"));
    }

    #[test]
    fn test_unlisted_messages_are_allowed() {
        let profile = profile_with(&["phishing", "malware"]);
        assert!(TopicPolicy::is_on_topic(&profile, "Hello there!"));
        assert!(TopicPolicy::is_on_topic(&profile, "How do I clean a CSV file?"));
    }

    #[test]
    fn test_empty_or_whitespace_message_is_on_topic() {
        let profile = profile_with(&["phishing"]);
        assert!(TopicPolicy::is_on_topic(&profile, ""));
        assert!(TopicPolicy::is_on_topic(&profile, "   \n\t"));
    }

    #[test]
    fn test_blocked_phrase_reports_first_match() {
        let profile = profile_with(&["malware", "phishing"]);
        assert_eq!(
            TopicPolicy::blocked_phrase(&profile, "phishing and malware"),
            Some("malware")
        );
    }

    #[test]
    fn test_result_is_independent_of_order() {
        let forward = profile_with(&["malware", "phishing"]);
        let reverse = profile_with(&["phishing", "malware"]);
        for message in ["phishing wave", "malware found", "weekly report"] {
            assert_eq!(
                TopicPolicy::is_on_topic(&forward, message),
                TopicPolicy::is_on_topic(&reverse, message)
            );
        }
    }
}
