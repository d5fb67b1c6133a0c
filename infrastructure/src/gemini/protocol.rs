//! Wire types for the Generative Language REST API.
//!
//! Only the fields this adapter reads are modelled; everything else in a
//! response is ignored.

use super::error::GeminiError;
use intel_domain::{Candidate, ContentPart, ModelDescriptor, ModelReply};
use serde::{Deserialize, Serialize};

/// `POST models/{model}:generateContent` body
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn carrying `prompt`
    pub fn user_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One fragment; non-text fragments (inline data, function calls) have no `text`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCandidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Convert into a domain reply.
    ///
    /// A prompt rejected outright, or a first candidate stopped for safety
    /// with no text, is reported as [`GeminiError::Blocked`].
    pub fn into_reply(self) -> Result<ModelReply, GeminiError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);
        if self.candidates.is_empty() {
            if let Some(reason) = block_reason {
                return Err(GeminiError::Blocked(reason));
            }
        }

        let candidates: Vec<Candidate> = self
            .candidates
            .into_iter()
            .map(|c| Candidate {
                parts: c
                    .content
                    .map(|content| {
                        content
                            .parts
                            .into_iter()
                            .map(|p| ContentPart { text: p.text })
                            .collect()
                    })
                    .unwrap_or_default(),
                finish_reason: c.finish_reason,
            })
            .collect();

        if let Some(first) = candidates.first()
            && first.finish_reason.as_deref() == Some("SAFETY")
            && first.joined_text().trim().is_empty()
        {
            return Err(GeminiError::Blocked("SAFETY".to_string()));
        }

        Ok(ModelReply::from_candidates(candidates))
    }
}

/// `GET models` page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Qualified name, `models/gemini-1.5-flash`
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl From<ModelInfo> for ModelDescriptor {
    fn from(info: ModelInfo) -> Self {
        ModelDescriptor {
            model: info.name.as_str().into(),
            supported_generation_methods: info.supported_generation_methods,
        }
    }
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub reason: Option<String>,
}

impl ErrorEnvelope {
    /// Build the adapter error for an HTTP status and raw body
    pub fn into_error(status: u16, body: &str) -> GeminiError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => GeminiError::Api {
                status,
                code: envelope.error.status,
                reason: envelope.error.details.into_iter().find_map(|d| d.reason),
                message: envelope.error.message,
            },
            Err(_) => GeminiError::Api {
                status,
                code: None,
                reason: None,
                message: body.trim().to_string(),
            },
        }
    }
}
