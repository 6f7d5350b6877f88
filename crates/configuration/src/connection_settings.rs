//! Connection settings needed to execute compiled statements on BigQuery.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

pub const SERVICE_ACCOUNT_KEY_PATH_VARIABLE: &str = "SEMQL_SERVICE_ACCOUNT_KEY_PATH";
pub const PROJECT_ID_VARIABLE: &str = "SEMQL_PROJECT_ID";
pub const DATASET_ID_VARIABLE: &str = "SEMQL_DATASET_ID";
pub const MAX_RESULTS_VARIABLE: &str = "SEMQL_MAX_RESULTS";

pub const DEFAULT_MAX_RESULTS: i32 = 10;

/// Everything needed to reach the warehouse and cap result sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionSettings {
    /// Path to a Google service account key JSON file.
    pub service_account_key_path: String,
    /// The GCP project queries are billed to.
    pub project_id: String,
    /// The dataset bound as each statement's default dataset.
    pub dataset_id: String,
    /// Cap on the number of result rows fetched per query.
    #[serde(default = "default_max_results")]
    pub max_results: i32,
}

fn default_max_results() -> i32 {
    DEFAULT_MAX_RESULTS
}

impl ConnectionSettings {
    /// Read settings from the process environment.
    pub fn from_environment() -> Result<Self, ConfigurationError> {
        Ok(ConnectionSettings {
            service_account_key_path: required_variable(SERVICE_ACCOUNT_KEY_PATH_VARIABLE)?,
            project_id: required_variable(PROJECT_ID_VARIABLE)?,
            dataset_id: required_variable(DATASET_ID_VARIABLE)?,
            max_results: match std::env::var(MAX_RESULTS_VARIABLE) {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigurationError::InvalidMaxResults(value))?,
                Err(_) => DEFAULT_MAX_RESULTS,
            },
        })
    }
}

fn required_variable(name: &'static str) -> Result<String, ConfigurationError> {
    std::env::var(name).map_err(|_| ConfigurationError::MissingEnvironmentVariable(name))
}
