//! Domain Assistant use case.
//!
//! One assistant per domain. Configuration resolves the domain's own
//! credential and picks a model; afterwards the assistant is immutable and
//! answers chat turns and auto-analysis requests.
//!
//! Neither [`DomainAssistant::chat`] nor [`DomainAssistant::analyze`] can
//! fail: every degraded path (no credential, off-topic message, gateway
//! failure, empty reply) ends in display text.

use crate::config::AssistantBehavior;
use crate::ports::conversation_logger::{
    ASSISTANT_CONFIGURED, ASSISTANT_PROMPT, ASSISTANT_REPLY, ConversationEvent,
    ConversationLogger, GATEWAY_FAILURE, NoConversationLogger, TOPIC_REJECTED,
};
use crate::ports::credentials::CredentialSource;
use crate::ports::model_gateway::{GatewayError, ModelGateway, ModelHandle};
use crate::ports::statistics::StatisticsProvider;
use intel_domain::util::truncate_chars;
use intel_domain::{
    AssistantNotice, AssistantOperation, AssistantPromptTemplate, DomainId, DomainProfile, Model,
    ModelDescriptor, TopicPolicy,
};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Snapshot of one assistant's readiness, safe to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantStatus {
    pub domain: DomainId,
    pub display_name: String,
    /// Logical key name only
    pub credential_key: String,
    pub credential_present: bool,
    pub configured: bool,
    pub model: Option<String>,
}

/// A configured (or unconfigured) assistant for one domain
pub struct DomainAssistant {
    profile: Arc<DomainProfile>,
    credential_present: bool,
    handle: Option<Box<dyn ModelHandle>>,
    behavior: AssistantBehavior,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl std::fmt::Debug for DomainAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainAssistant")
            .field("domain", &self.profile.domain_id)
            .field("credential_present", &self.credential_present)
            .field("model", &self.model())
            .finish()
    }
}

impl DomainAssistant {
    /// An assistant that never reaches a model.
    pub fn unconfigured(profile: Arc<DomainProfile>) -> Self {
        Self {
            profile,
            credential_present: false,
            handle: None,
            behavior: AssistantBehavior::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Resolve the credential and establish a model handle.
    ///
    /// Without a credential this returns immediately and no gateway method
    /// is called. Otherwise the discovered model is tried first, then each
    /// fallback in order; the first handle obtained wins.
    pub async fn configure(
        profile: Arc<DomainProfile>,
        credentials: &dyn CredentialSource,
        gateway: &dyn ModelGateway,
        behavior: AssistantBehavior,
        conversation_logger: Arc<dyn ConversationLogger>,
    ) -> Self {
        let domain = profile.domain_id;

        let Some(credential) = credentials.lookup(&profile.credential_key) else {
            info!(
                "{} not configured: {} is not set",
                profile.display_name, profile.credential_key
            );
            let assistant = Self {
                profile,
                credential_present: false,
                handle: None,
                behavior,
                conversation_logger,
            };
            assistant.log_configured();
            return assistant;
        };

        let limit = behavior.request_timeout;
        let preferred = match bounded(limit, gateway.list_models(&credential)).await {
            Ok(catalog) => {
                let selected = ModelDescriptor::select_preferred(&catalog);
                match &selected {
                    Some(model) => debug!("{}: discovered model {}", domain, model),
                    None => warn!(
                        "{}: none of {} listed models is usable, trying fallbacks",
                        domain,
                        catalog.len()
                    ),
                }
                selected
            }
            Err(e) => {
                warn!("{}: model listing failed, trying fallbacks: {}", domain, e);
                None
            }
        };

        let mut handle = None;
        for model in behavior.candidate_models(preferred) {
            match bounded(limit, gateway.create_model(&credential, &model)).await {
                Ok(h) => {
                    handle = Some(h);
                    break;
                }
                Err(e) => debug!("{}: model {} unavailable: {}", domain, model, e),
            }
        }

        match handle.as_ref() {
            Some(h) => info!("{} configured with {}", profile.display_name, h.model()),
            None => warn!(
                "{} not configured: no model could be obtained",
                profile.display_name
            ),
        }

        let assistant = Self {
            profile,
            credential_present: true,
            handle,
            behavior,
            conversation_logger,
        };
        assistant.log_configured();
        assistant
    }

    /// Answer one chat turn.
    ///
    /// Off-topic messages get the profile's restricted reply without any
    /// gateway call.
    pub async fn chat(&self, message: &str, stats: Option<&dyn StatisticsProvider>) -> String {
        let operation = AssistantOperation::Chat;
        let Some(handle) = self.handle.as_deref() else {
            return AssistantNotice::not_configured(&self.profile, operation);
        };

        if let Some(phrase) = TopicPolicy::blocked_phrase(&self.profile, message) {
            debug!("{}: message rejected on '{}'", self.domain(), phrase);
            self.conversation_logger.log(ConversationEvent::new(
                TOPIC_REJECTED,
                serde_json::json!({
                    "domain": self.domain().as_str(),
                    "phrase": phrase,
                }),
            ));
            return self.profile.restricted_reply.clone();
        }

        let data_context = self.data_context(stats).await;
        let bounded_message = truncate_chars(message, self.behavior.max_message_chars);
        if bounded_message.len() < message.len() {
            debug!(
                "{}: message truncated to {} chars",
                self.domain(),
                self.behavior.max_message_chars
            );
        }
        let prompt =
            AssistantPromptTemplate::chat_prompt(&self.profile, &data_context, bounded_message);
        self.complete(handle, operation, &prompt).await
    }

    /// Produce the unprompted analysis of this domain's data.
    pub async fn analyze(&self, stats: Option<&dyn StatisticsProvider>) -> String {
        let operation = AssistantOperation::Analysis;
        let Some(handle) = self.handle.as_deref() else {
            return AssistantNotice::not_configured(&self.profile, operation);
        };

        let data_context = self.data_context(stats).await;
        let prompt = AssistantPromptTemplate::analysis_prompt(&self.profile, &data_context);
        self.complete(handle, operation, &prompt).await
    }

    pub fn profile(&self) -> &DomainProfile {
        &self.profile
    }

    pub fn domain(&self) -> DomainId {
        self.profile.domain_id
    }

    pub fn credential_present(&self) -> bool {
        self.credential_present
    }

    pub fn is_configured(&self) -> bool {
        self.handle.is_some()
    }

    pub fn model(&self) -> Option<&Model> {
        self.handle.as_ref().map(|h| h.model())
    }

    pub fn status(&self) -> AssistantStatus {
        AssistantStatus {
            domain: self.domain(),
            display_name: self.profile.display_name.clone(),
            credential_key: self.profile.credential_key.to_string(),
            credential_present: self.credential_present,
            configured: self.is_configured(),
            model: self.model().map(|m| m.to_string()),
        }
    }

    /// This domain's data block, or empty when unavailable
    async fn data_context(&self, stats: Option<&dyn StatisticsProvider>) -> String {
        let Some(provider) = stats else {
            return String::new();
        };
        match provider.snapshot(self.domain()).await {
            Ok(snapshot) if snapshot.domain() == self.domain() => snapshot.render_context(),
            Ok(snapshot) => {
                warn!(
                    "{}: ignoring statistics for {}",
                    self.domain(),
                    snapshot.domain()
                );
                String::new()
            }
            Err(e) => {
                warn!("{}: statistics unavailable: {}", self.domain(), e);
                String::new()
            }
        }
    }

    async fn complete(
        &self,
        handle: &dyn ModelHandle,
        operation: AssistantOperation,
        prompt: &str,
    ) -> String {
        let domain = self.domain();
        debug!("{}: sending {} chars to {}", domain, prompt.len(), handle.model());
        self.conversation_logger.log(ConversationEvent::new(
            ASSISTANT_PROMPT,
            serde_json::json!({
                "domain": domain.as_str(),
                "operation": operation_name(operation),
                "model": handle.model().as_str(),
                "prompt_chars": prompt.chars().count(),
            }),
        ));

        match bounded(self.behavior.request_timeout, handle.generate(prompt)).await {
            Ok(reply) => match reply.text() {
                Some(text) => {
                    self.conversation_logger.log(ConversationEvent::new(
                        ASSISTANT_REPLY,
                        serde_json::json!({
                            "domain": domain.as_str(),
                            "operation": operation_name(operation),
                            "text": text,
                        }),
                    ));
                    text
                }
                None => {
                    warn!("{}: model returned no text", domain);
                    AssistantNotice::empty_response(operation)
                }
            },
            Err(e) => {
                let kind = e.kind();
                warn!("{}: gateway call failed ({}): {}", domain, kind, e);
                self.conversation_logger.log(ConversationEvent::new(
                    GATEWAY_FAILURE,
                    serde_json::json!({
                        "domain": domain.as_str(),
                        "operation": operation_name(operation),
                        "kind": kind.as_str(),
                    }),
                ));
                AssistantNotice::failure(&self.profile, operation, kind, &e.detail())
            }
        }
    }

    fn log_configured(&self) {
        self.conversation_logger.log(ConversationEvent::new(
            ASSISTANT_CONFIGURED,
            serde_json::json!({
                "domain": self.domain().as_str(),
                "credential_present": self.credential_present,
                "model": self.model().map(|m| m.to_string()),
            }),
        ));
    }
}

fn operation_name(operation: AssistantOperation) -> &'static str {
    match operation {
        AssistantOperation::Chat => "chat",
        AssistantOperation::Analysis => "analysis",
    }
}

/// Await a gateway call for at most `limit`.
async fn bounded<T>(
    limit: Duration,
    call: impl Future<Output = Result<T, GatewayError>>,
) -> Result<T, GatewayError> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(GatewayError::Timeout(limit)),
    }
}
