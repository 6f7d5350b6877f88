//! BigQuery client setup from connection settings.

use crate::connection_settings::ConnectionSettings;
use crate::error::ConfigurationError;

/// Build a BigQuery client from the configured service account key.
pub async fn create_client(
    settings: &ConnectionSettings,
) -> Result<gcp_bigquery_client::Client, ConfigurationError> {
    let service_account_key =
        yup_oauth2::read_service_account_key(&settings.service_account_key_path)
            .await
            .map_err(ConfigurationError::ServiceAccountKey)?;

    tracing::info!(project_id = %settings.project_id, "initializing BigQuery client");

    gcp_bigquery_client::Client::from_service_account_key(service_account_key, false)
        .await
        .map_err(ConfigurationError::ClientInitialization)
}
