//! Gemini adapter
//!
//! Implements [`ModelGateway`](intel_application::ModelGateway) over the
//! Generative Language REST API. The credential travels in the
//! `x-goog-api-key` header, never in a URL.

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;

pub use gateway::{GeminiGateway, GeminiModel};
