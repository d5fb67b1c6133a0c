//! Topic firewall
//!
//! Decides whether a free-text message stays inside a domain. The model
//! behind the assistant knows nothing about these boundaries, so this check
//! is the only enforcement point.

mod topic;

pub use topic::TopicPolicy;
