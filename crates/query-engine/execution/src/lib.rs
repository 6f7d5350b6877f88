//! Query execution against a BigQuery data warehouse.

pub mod error;
pub mod metrics;
pub mod query;
