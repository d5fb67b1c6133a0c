//! Profile catalog keyed by domain

use super::DomainProfile;
use crate::core::credential::CredentialKey;
use crate::core::domain_id::DomainId;
use crate::core::error::DomainError;
use std::collections::HashMap;
use std::sync::Arc;

/// Deployment-specific adjustments to a built-in profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOverride {
    /// Replacement logical credential key
    pub credential_key: Option<CredentialKey>,
    /// Phrases appended to the curated deny-list
    pub extra_blocked_topics: Vec<String>,
}

impl ProfileOverride {
    pub fn is_empty(&self) -> bool {
        self.credential_key.is_none() && self.extra_blocked_topics.is_empty()
    }
}

/// One profile per domain, loaded once at startup
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: HashMap<DomainId, Arc<DomainProfile>>,
}

impl ProfileCatalog {
    /// Catalog of the curated built-in profiles
    pub fn builtin() -> Self {
        Self::from_profiles(DomainId::ALL.iter().map(|d| DomainProfile::builtin(*d)))
    }

    /// Build a catalog from explicit profiles.
    ///
    /// Domains missing from `profiles` fall back to their built-in record so
    /// that lookups are total.
    pub fn from_profiles(profiles: impl IntoIterator<Item = DomainProfile>) -> Self {
        let mut map: HashMap<DomainId, Arc<DomainProfile>> = profiles
            .into_iter()
            .map(|p| (p.domain_id, Arc::new(p)))
            .collect();
        for domain in DomainId::ALL {
            map.entry(domain)
                .or_insert_with(|| Arc::new(DomainProfile::builtin(domain)));
        }
        Self { profiles: map }
    }

    /// Built-in profiles with per-domain overrides applied
    pub fn with_overrides(overrides: &HashMap<DomainId, ProfileOverride>) -> Self {
        Self::from_profiles(DomainId::ALL.iter().map(|domain| {
            let mut profile = DomainProfile::builtin(*domain);
            if let Some(o) = overrides.get(domain) {
                if let Some(key) = &o.credential_key {
                    profile = profile.with_credential_key(key.clone());
                }
                profile = profile.with_extra_blocked_topics(o.extra_blocked_topics.iter().cloned());
            }
            profile
        }))
    }

    pub fn get(&self, domain: DomainId) -> Arc<DomainProfile> {
        match self.profiles.get(&domain) {
            Some(profile) => Arc::clone(profile),
            None => Arc::new(DomainProfile::builtin(domain)),
        }
    }

    /// Profiles in display order
    pub fn iter(&self) -> impl Iterator<Item = Arc<DomainProfile>> + '_ {
        DomainId::ALL.iter().map(|d| self.get(*d))
    }

    /// Check the credential partition: every key non-empty and no key
    /// shared between two domains.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen: HashMap<&str, DomainId> = HashMap::new();
        for domain in DomainId::ALL {
            let Some(profile) = self.profiles.get(&domain) else {
                continue;
            };
            if profile.credential_key.is_empty() {
                return Err(DomainError::EmptyCredentialKey(domain.to_string()));
            }
            if let Some(first) = seen.insert(profile.credential_key.as_str(), domain) {
                return Err(DomainError::SharedCredentialKey {
                    key: profile.credential_key.to_string(),
                    first: first.to_string(),
                    second: domain.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
