//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording assistant events
//! (prompts, replies, topic rejections, gateway failures) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! assistant transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// Event type for an assistant that finished configuration
pub const ASSISTANT_CONFIGURED: &str = "assistant_configured";
/// Event type for a message stopped by the topic firewall
pub const TOPIC_REJECTED: &str = "topic_rejected";
/// Event type for a prompt sent to the model
pub const ASSISTANT_PROMPT: &str = "assistant_prompt";
/// Event type for text returned to the caller from the model
pub const ASSISTANT_REPLY: &str = "assistant_reply";
/// Event type for a classified gateway failure
pub const GATEWAY_FAILURE: &str = "gateway_failure";

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The timestamp is added by the writer.
pub struct ConversationEvent {
    /// Event type identifier (one of the constants in this module).
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// The `log` method is synchronous and non-fallible; logging failures are
/// silently ignored so they can never change what the caller sees.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
