//! Model replies and failure classes.

pub mod failure;
pub mod response;

pub use failure::FailureKind;
pub use response::{Candidate, ContentPart, ModelReply};
