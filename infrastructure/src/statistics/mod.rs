//! Statistics adapters
//!
//! Implementations of the [`StatisticsProvider`](intel_application::StatisticsProvider)
//! port over the relational store.

mod sqlite;

pub use sqlite::SqliteStatisticsProvider;
