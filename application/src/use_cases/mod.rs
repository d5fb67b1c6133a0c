//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assistant_registry;
pub mod domain_assistant;

#[cfg(test)]
pub(crate) mod test_support;
