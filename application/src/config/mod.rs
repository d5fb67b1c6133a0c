//! Application-level configuration.
//!
//! - [`AssistantBehavior`]: per-request limits for domain assistants

pub mod assistant_behavior;

pub use assistant_behavior::AssistantBehavior;
