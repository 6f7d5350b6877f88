//! Errors for query execution.

use thiserror::Error;

/// A type for execution errors.
///
/// Execution failures are the warehouse's verdicts, including statements the
/// compiler routed a filter on an unknown field into; we report them as-is
/// and never reinterpret them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("BigQuery request failed: {0}")]
    BigQuery(#[from] gcp_bigquery_client::error::BQError),
    #[error("could not read column {column} of result row {row}: {error}")]
    ResultCell {
        row: usize,
        column: usize,
        error: gcp_bigquery_client::error::BQError,
    },
}
