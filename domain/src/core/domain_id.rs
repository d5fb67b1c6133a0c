//! Domain identifier value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The three isolated subject areas served by the platform (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DomainId {
    Cybersecurity,
    DataScience,
    ItOperations,
}

impl DomainId {
    /// Every domain, in display order
    pub const ALL: [DomainId; 3] = [
        DomainId::Cybersecurity,
        DomainId::DataScience,
        DomainId::ItOperations,
    ];

    /// Get the string identifier for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainId::Cybersecurity => "cybersecurity",
            DomainId::DataScience => "datascience",
            DomainId::ItOperations => "it_operations",
        }
    }

    /// Human-readable topic label used in the prompt's boundary reminder
    ///
    /// This is the identifier with underscores turned into spaces, so
    /// `it_operations` reads as "it operations".
    pub fn topic_label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DomainId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cybersecurity" | "cyber" => Ok(DomainId::Cybersecurity),
            "datascience" | "data" => Ok(DomainId::DataScience),
            "it_operations" | "it-operations" | "it" => Ok(DomainId::ItOperations),
            other => Err(DomainError::UnknownDomain(other.to_string())),
        }
    }
}

impl Serialize for DomainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DomainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
