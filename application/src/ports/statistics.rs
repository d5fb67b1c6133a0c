//! Statistics Provider port
//!
//! Read-only aggregate queries over the persisted records, one per domain.

use async_trait::async_trait;
use intel_domain::{DatasetStats, DomainId, IncidentStats, StatisticsSnapshot, TicketStats};
use thiserror::Error;

/// Errors that can occur while computing statistics
#[derive(Error, Debug)]
pub enum StatisticsError {
    #[error("Statistics store unavailable: {0}")]
    Unavailable(String),

    #[error("Statistics query failed: {0}")]
    QueryFailed(String),
}

/// Aggregate-query interface into the tabular data
#[async_trait]
pub trait StatisticsProvider: Send + Sync {
    /// Cybersecurity incident aggregates
    async fn incident_stats(&self) -> Result<IncidentStats, StatisticsError>;

    /// Dataset catalog aggregates
    async fn dataset_stats(&self) -> Result<DatasetStats, StatisticsError>;

    /// IT ticket aggregates
    async fn ticket_stats(&self) -> Result<TicketStats, StatisticsError>;

    /// Snapshot for exactly one domain.
    ///
    /// Only the query belonging to `domain` runs.
    async fn snapshot(&self, domain: DomainId) -> Result<StatisticsSnapshot, StatisticsError> {
        Ok(match domain {
            DomainId::Cybersecurity => StatisticsSnapshot::Incidents(self.incident_stats().await?),
            DomainId::DataScience => StatisticsSnapshot::Datasets(self.dataset_stats().await?),
            DomainId::ItOperations => StatisticsSnapshot::Tickets(self.ticket_stats().await?),
        })
    }
}
