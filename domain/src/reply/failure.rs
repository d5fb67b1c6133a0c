//! Gateway failure classification

use serde::{Deserialize, Serialize};

/// Machine-readable class of a failed model call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidCredential,
    QuotaExceeded,
    SafetyFiltered,
    Unknown,
}

impl FailureKind {
    /// Classify a raw error message from a remote SDK or HTTP body.
    ///
    /// This is the only place error text is inspected. Markers are checked in
    /// order: credential, quota, safety filter.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if message.contains("API_KEY_INVALID") || lower.contains("invalid") {
            FailureKind::InvalidCredential
        } else if lower.contains("quota") {
            FailureKind::QuotaExceeded
        } else if lower.contains("blocked") {
            FailureKind::SafetyFiltered
        } else {
            FailureKind::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidCredential => "invalid_credential",
            FailureKind::QuotaExceeded => "quota_exceeded",
            FailureKind::SafetyFiltered => "safety_filtered",
            FailureKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_markers() {
        assert_eq!(FailureKind::classify("API_KEY_INVALID"), FailureKind::InvalidCredential);
        assert_eq!(
            FailureKind::classify("400 API key not valid: Invalid argument"),
            FailureKind::InvalidCredential
        );
    }

    #[test]
    fn test_quota_any_case() {
        assert_eq!(FailureKind::classify("quota exhausted"), FailureKind::QuotaExceeded);
        assert_eq!(
            FailureKind::classify("429 QUOTA exceeded for metric"),
            FailureKind::QuotaExceeded
        );
    }

    #[test]
    fn test_blocked_marker() {
        assert_eq!(
            FailureKind::classify("response blocked due to SAFETY"),
            FailureKind::SafetyFiltered
        );
        assert_eq!(FailureKind::classify("Prompt was BLOCKED"), FailureKind::SafetyFiltered);
    }

    #[test]
    fn test_credential_marker_wins_over_later_markers() {
        assert_eq!(
            FailureKind::classify("invalid request: quota blocked"),
            FailureKind::InvalidCredential
        );
    }

    #[test]
    fn test_everything_else_is_unknown() {
        assert_eq!(FailureKind::classify("connection reset by peer"), FailureKind::Unknown);
        assert_eq!(FailureKind::classify(""), FailureKind::Unknown);
    }
}
