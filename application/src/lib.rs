//! Application layer for intel-platform
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AssistantBehavior;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    credentials::{CredentialSource, StaticCredentials},
    model_gateway::{GatewayError, ModelGateway, ModelHandle},
    statistics::{StatisticsError, StatisticsProvider},
};
pub use use_cases::assistant_registry::AssistantRegistry;
pub use use_cases::domain_assistant::{AssistantStatus, DomainAssistant};
