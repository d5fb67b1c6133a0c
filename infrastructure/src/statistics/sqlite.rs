//! SQLite statistics provider.
//!
//! Runs read-only aggregate queries over the `cyber_incidents`,
//! `datasets_metadata` and `it_tickets` tables. Schema management belongs
//! to whatever populates the database; nothing here writes.

use async_trait::async_trait;
use intel_application::ports::statistics::{StatisticsError, StatisticsProvider};
use intel_domain::stats::round2;
use intel_domain::{
    AssigneeLoad, Breakdown, DatasetStats, DepartmentUsage, IncidentStats, TicketStats,
};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

fn query_failed(e: sqlx::Error) -> StatisticsError {
    StatisticsError::QueryFailed(e.to_string())
}

/// Aggregate queries against a SQLite database
#[derive(Debug, Clone)]
pub struct SqliteStatisticsProvider {
    pool: SqlitePool,
}

impl SqliteStatisticsProvider {
    /// Open `url` (e.g. `sqlite:intelligence_platform.db`) read-only
    pub async fn connect(url: &str) -> Result<Self, StatisticsError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StatisticsError::Unavailable(e.to_string()))?
            .read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(|e| StatisticsError::Unavailable(format!("{}: {}", url, e)))?;
        debug!("Statistics store opened: {}", url);
        Ok(Self { pool })
    }

    /// Use an existing pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn count(&self, sql: &str) -> Result<u64, StatisticsError> {
        let n: i64 = sqlx::query_scalar(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;
        Ok(n.max(0) as u64)
    }

    /// Scalar aggregate where NULL (no rows) counts as zero
    async fn aggregate(&self, sql: &str) -> Result<f64, StatisticsError> {
        let value: Option<f64> = sqlx::query_scalar(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)?;
        Ok(value.unwrap_or(0.0))
    }

    /// `SELECT key, COUNT(*) ... GROUP BY key` into a breakdown
    async fn breakdown(&self, sql: &str) -> Result<Breakdown, StatisticsError> {
        let rows = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;
        let mut breakdown = Breakdown::new();
        for row in rows {
            let key: String = row.try_get(0).map_err(query_failed)?;
            let count: i64 = row.try_get(1).map_err(query_failed)?;
            breakdown.insert(key, count.max(0) as u64);
        }
        Ok(breakdown)
    }
}

#[async_trait]
impl StatisticsProvider for SqliteStatisticsProvider {
    async fn incident_stats(&self) -> Result<IncidentStats, StatisticsError> {
        Ok(IncidentStats {
            total: self.count("SELECT COUNT(*) FROM cyber_incidents").await?,
            by_status: self
                .breakdown(
                    "SELECT COALESCE(status, 'Unknown'), COUNT(*) \
                     FROM cyber_incidents GROUP BY 1",
                )
                .await?,
            by_severity: self
                .breakdown(
                    "SELECT COALESCE(severity, 'Unknown'), COUNT(*) \
                     FROM cyber_incidents GROUP BY 1",
                )
                .await?,
            by_threat_type: self
                .breakdown(
                    "SELECT COALESCE(threat_type, 'Unknown'), COUNT(*) \
                     FROM cyber_incidents GROUP BY 1",
                )
                .await?,
            avg_resolution_hours: round2(
                self.aggregate(
                    "SELECT AVG(resolution_time_hours) FROM cyber_incidents \
                     WHERE resolved_at IS NOT NULL",
                )
                .await?,
            ),
        })
    }

    async fn dataset_stats(&self) -> Result<DatasetStats, StatisticsError> {
        let total_size_mb = self
            .aggregate("SELECT SUM(size_mb) FROM datasets_metadata")
            .await?;

        let rows = sqlx::query(
            "SELECT COALESCE(source_department, 'Unknown'), COUNT(*), SUM(size_mb) \
             FROM datasets_metadata GROUP BY 1",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;
        let mut by_department = BTreeMap::new();
        for row in rows {
            let department: String = row.try_get(0).map_err(query_failed)?;
            let count: i64 = row.try_get(1).map_err(query_failed)?;
            let size_mb: Option<f64> = row.try_get(2).map_err(query_failed)?;
            by_department.insert(
                department,
                DepartmentUsage {
                    count: count.max(0) as u64,
                    size_mb: size_mb.unwrap_or(0.0),
                },
            );
        }

        Ok(DatasetStats {
            total: self.count("SELECT COUNT(*) FROM datasets_metadata").await?,
            total_size_mb: round2(total_size_mb),
            total_size_gb: round2(total_size_mb / 1024.0),
            by_department,
            by_status: self
                .breakdown(
                    "SELECT COALESCE(status, 'Unknown'), COUNT(*) \
                     FROM datasets_metadata GROUP BY 1",
                )
                .await?,
            avg_quality_score: round2(
                self.aggregate("SELECT AVG(quality_score) FROM datasets_metadata")
                    .await?,
            ),
        })
    }

    async fn ticket_stats(&self) -> Result<TicketStats, StatisticsError> {
        let rows = sqlx::query(
            "SELECT COALESCE(assigned_to, 'Unassigned'), COUNT(*), AVG(resolution_time_hours) \
             FROM it_tickets GROUP BY 1",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;
        let mut by_assignee = BTreeMap::new();
        for row in rows {
            let assignee: String = row.try_get(0).map_err(query_failed)?;
            let count: i64 = row.try_get(1).map_err(query_failed)?;
            let avg: Option<f64> = row.try_get(2).map_err(query_failed)?;
            by_assignee.insert(
                assignee,
                AssigneeLoad {
                    count: count.max(0) as u64,
                    avg_resolution: round2(avg.unwrap_or(0.0)),
                },
            );
        }

        let sla_met = self
            .count("SELECT COUNT(*) FROM it_tickets WHERE sla_met = 'Yes'")
            .await?;
        let sla_total = self
            .count("SELECT COUNT(*) FROM it_tickets WHERE sla_met IS NOT NULL")
            .await?;
        let sla_compliance = if sla_total > 0 {
            round2(sla_met as f64 / sla_total as f64 * 100.0)
        } else {
            0.0
        };

        Ok(TicketStats {
            total: self.count("SELECT COUNT(*) FROM it_tickets").await?,
            by_status: self
                .breakdown(
                    "SELECT COALESCE(status, 'Unknown'), COUNT(*) FROM it_tickets GROUP BY 1",
                )
                .await?,
            by_category: self
                .breakdown(
                    "SELECT COALESCE(category, 'Unknown'), COUNT(*) FROM it_tickets GROUP BY 1",
                )
                .await?,
            by_assignee,
            sla_compliance,
            avg_resolution_hours: round2(
                self.aggregate(
                    "SELECT AVG(resolution_time_hours) FROM it_tickets \
                     WHERE resolved_at IS NOT NULL",
                )
                .await?,
            ),
        })
    }
}
