//! Statistics snapshots
//!
//! Per-domain aggregate figures fed into prompts. A snapshot carries exactly
//! one domain's numbers; there is no way to build a snapshot that mixes
//! domains.

use crate::core::domain_id::DomainId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Count per category value (status, severity, threat type, ...)
pub type Breakdown = BTreeMap<String, u64>;

/// Cybersecurity incident aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentStats {
    pub total: u64,
    pub by_status: Breakdown,
    pub by_severity: Breakdown,
    pub by_threat_type: Breakdown,
    pub avg_resolution_hours: f64,
}

/// Storage footprint of one department's datasets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentUsage {
    pub count: u64,
    pub size_mb: f64,
}

/// Dataset catalog aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total: u64,
    pub total_size_mb: f64,
    pub total_size_gb: f64,
    pub by_department: BTreeMap<String, DepartmentUsage>,
    pub by_status: Breakdown,
    pub avg_quality_score: f64,
}

/// Workload of one assignee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssigneeLoad {
    pub count: u64,
    pub avg_resolution: f64,
}

/// IT ticket aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketStats {
    pub total: u64,
    pub by_status: Breakdown,
    pub by_category: Breakdown,
    pub by_assignee: BTreeMap<String, AssigneeLoad>,
    /// Percentage of tickets that met their SLA
    pub sla_compliance: f64,
    pub avg_resolution_hours: f64,
}

/// One domain's aggregate figures for a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatisticsSnapshot {
    Incidents(IncidentStats),
    Datasets(DatasetStats),
    Tickets(TicketStats),
}

impl StatisticsSnapshot {
    /// The domain these figures belong to
    pub fn domain(&self) -> DomainId {
        match self {
            StatisticsSnapshot::Incidents(_) => DomainId::Cybersecurity,
            StatisticsSnapshot::Datasets(_) => DomainId::DataScience,
            StatisticsSnapshot::Tickets(_) => DomainId::ItOperations,
        }
    }

    /// Render the data context block injected into prompts
    pub fn render_context(&self) -> String {
        match self {
            StatisticsSnapshot::Incidents(s) => format!(
                "CYBERSECURITY INCIDENT DATA (Your ONLY data source):\n\
                 - Total incidents: {}\n\
                 - By status: {}\n\
                 - By severity: {}\n\
                 - By threat type: {}\n\
                 - Average resolution time: {} hours\n\
                 \n\
                 You can ONLY analyze and discuss this security incident data.",
                s.total,
                render_breakdown(&s.by_status),
                render_breakdown(&s.by_severity),
                render_breakdown(&s.by_threat_type),
                s.avg_resolution_hours,
            ),
            StatisticsSnapshot::Datasets(s) => format!(
                "DATASET CATALOG DATA (Your ONLY data source):\n\
                 - Total datasets: {}\n\
                 - Total storage: {} GB\n\
                 - By department: {}\n\
                 - By status: {}\n\
                 - Average quality score: {}\n\
                 \n\
                 You can ONLY analyze and discuss this dataset catalog data.",
                s.total,
                s.total_size_gb,
                render_map(&s.by_department, |u| format!(
                    "{} datasets, {} MB",
                    u.count, u.size_mb
                )),
                render_breakdown(&s.by_status),
                s.avg_quality_score,
            ),
            StatisticsSnapshot::Tickets(s) => format!(
                "IT TICKET DATA (Your ONLY data source):\n\
                 - Total tickets: {}\n\
                 - By status: {}\n\
                 - By category: {}\n\
                 - By assigned staff: {}\n\
                 - SLA compliance: {}%\n\
                 - Average resolution time: {} hours\n\
                 \n\
                 You can ONLY analyze and discuss this IT ticket data.",
                s.total,
                render_breakdown(&s.by_status),
                render_breakdown(&s.by_category),
                render_map(&s.by_assignee, |l| format!(
                    "{} tickets, avg {} h",
                    l.count, l.avg_resolution
                )),
                s.sla_compliance,
                s.avg_resolution_hours,
            ),
        }
    }
}

fn render_breakdown(breakdown: &Breakdown) -> String {
    render_map(breakdown, |count| count.to_string())
}

fn render_map<V>(map: &BTreeMap<String, V>, value: impl Fn(&V) -> String) -> String {
    let mut out = String::from("{");
    for (i, (key, v)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}: {}", key, value(v));
    }
    out.push('}');
    out
}

/// Round to two decimals, the precision every average is reported with
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
