//! Model reply payloads.
//!
//! Gateways hand back either a plain text payload or a structured candidate
//! list whose parts carry text fragments. [`ModelReply::text`] normalizes
//! both shapes into display text.

use serde::{Deserialize, Serialize};

/// A fragment of a candidate's content. Non-text parts carry `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A part without text (inline data, function calls, ...)
    pub fn non_text() -> Self {
        Self { text: None }
    }
}

/// One generated alternative
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub parts: Vec<ContentPart>,
    pub finish_reason: Option<String>,
}

impl Candidate {
    pub fn from_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            parts,
            finish_reason: None,
        }
    }

    /// Concatenation of every text fragment, in order
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect()
    }
}

/// A successful gateway response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelReply {
    /// A direct text payload
    Text { text: String },
    /// A structured candidate list
    Candidates { candidates: Vec<Candidate> },
}

impl ModelReply {
    pub fn from_text(text: impl Into<String>) -> Self {
        ModelReply::Text { text: text.into() }
    }

    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        ModelReply::Candidates { candidates }
    }

    /// Extract display text.
    ///
    /// Direct text is used as-is; for candidate lists the first candidate's
    /// fragments are concatenated. Returns `None` when nothing non-blank is
    /// available.
    pub fn text(&self) -> Option<String> {
        let text = match self {
            ModelReply::Text { text } => text.clone(),
            ModelReply::Candidates { candidates } => candidates
                .first()
                .map(Candidate::joined_text)
                .unwrap_or_default(),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
