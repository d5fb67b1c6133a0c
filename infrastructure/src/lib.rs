//! Infrastructure layer for intel-platform
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod gemini;
pub mod logging;
pub mod statistics;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use credentials::EnvCredentialSource;
pub use gemini::{
    client::GeminiClient,
    error::{GeminiError, Result},
    gateway::{GeminiGateway, GeminiModel},
};
pub use logging::JsonlConversationLogger;
pub use statistics::SqliteStatisticsProvider;
