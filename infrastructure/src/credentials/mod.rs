//! Credential adapters
//!
//! Resolve per-domain secrets from the process environment, optionally
//! seeded from `.env` files.

mod env;

pub use env::EnvCredentialSource;
