//! Prompt domain
//!
//! Prompt composition for chat and auto-analysis, and the fixed notices
//! returned when no model output is available.

mod assistant;
mod notice;

pub use assistant::AssistantPromptTemplate;
pub use notice::{AssistantNotice, AssistantOperation};
