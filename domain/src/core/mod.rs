//! Core domain concepts shared across all subdomains.
//!
//! - [`domain_id::DomainId`]: the three isolated subject areas
//! - [`model::Model`]: remote language models and catalog entries
//! - [`credential::CredentialKey`] / [`credential::ApiCredential`]: per-domain secrets
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod domain_id;
pub mod error;
pub mod model;
