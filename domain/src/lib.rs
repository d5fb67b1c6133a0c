//! Domain layer for intel-platform
//!
//! This crate contains the core business logic, entities, and value objects
//! of the domain-restricted assistant gateway. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Domains
//!
//! Three isolated subject areas ([`DomainId`]): cybersecurity, datascience and
//! it_operations. Each has its own [`DomainProfile`] with a credential key,
//! persona, deny-list and canned replies.
//!
//! ## Topic firewall
//!
//! [`TopicPolicy`] rejects a message when it contains one of the profile's
//! blocked phrases. Rejected messages never reach a model.
//!
//! ## Replies
//!
//! Model output arrives as a [`ModelReply`]; failures are grouped into
//! [`FailureKind`]s and turned into display text by [`AssistantNotice`].

pub mod conversation;
pub mod core;
pub mod policy;
pub mod profile;
pub mod prompt;
pub mod reply;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use conversation::{ChatRole, ChatTurn};
pub use core::{
    credential::{ApiCredential, CredentialKey},
    domain_id::DomainId,
    error::DomainError,
    model::{GENERATE_CONTENT, Model, ModelDescriptor},
};
pub use policy::TopicPolicy;
pub use profile::{AnalysisTemplate, DomainProfile, ProfileCatalog, ProfileOverride};
pub use prompt::{AssistantNotice, AssistantOperation, AssistantPromptTemplate};
pub use reply::{Candidate, ContentPart, FailureKind, ModelReply};
pub use stats::{
    AssigneeLoad, Breakdown, DatasetStats, DepartmentUsage, IncidentStats, StatisticsSnapshot,
    TicketStats,
};
