//! Errors for configuration and warehouse client setup.

use thiserror::Error;

/// A type for configuration errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("missing environment variable: {0}")]
    MissingEnvironmentVariable(&'static str),
    #[error("SEMQL_MAX_RESULTS is not a number: {0}")]
    InvalidMaxResults(String),
    #[error("could not read the service account key: {0}")]
    ServiceAccountKey(std::io::Error),
    #[error("could not initialize the BigQuery client: {0}")]
    ClientInitialization(gcp_bigquery_client::error::BQError),
}
