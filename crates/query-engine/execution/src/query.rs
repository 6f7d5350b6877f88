//! Execute a compiled statement against the warehouse.

use gcp_bigquery_client::model::dataset_reference::DatasetReference;
use gcp_bigquery_client::model::query_request::QueryRequest;
use serde_json::Value;

use semql_sql::sql;

use crate::error::Error;
use crate::metrics::Metrics;

/// A tabular query result: column names plus rows of JSON cells.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Execute a statement on BigQuery, binding the configured default dataset
/// and capping the number of fetched rows.
pub async fn execute(
    bigquery_client: &gcp_bigquery_client::Client,
    metrics: &Metrics,
    project_id: &str,
    dataset_id: &str,
    max_results: i32,
    statement: &sql::string::SQL,
) -> Result<QueryRows, Error> {
    let mut query_request = QueryRequest::new(statement.sql.clone());
    query_request.default_dataset = Some(DatasetReference {
        dataset_id: dataset_id.to_string(),
        project_id: project_id.to_string(),
    });
    query_request.max_results = Some(max_results);

    tracing::info!(sql = %statement.sql, "executing statement");

    let mut result_set = match bigquery_client.job().query(project_id, query_request).await {
        Ok(result_set) => result_set,
        Err(error) => {
            metrics.record_failed_query();
            return Err(Error::BigQuery(error));
        }
    };

    let columns = result_set.column_names();
    let mut rows = Vec::with_capacity(result_set.row_count());
    while result_set.next_row() {
        let mut row = Vec::with_capacity(columns.len());
        for column_index in 0..columns.len() {
            let cell = result_set
                .get_json_value(column_index)
                .map_err(|error| Error::ResultCell {
                    row: rows.len(),
                    column: column_index,
                    error,
                })?;
            row.push(cell.unwrap_or(Value::Null));
        }
        rows.push(row);
    }

    metrics.record_successful_query();
    tracing::info!(rows = rows.len(), "statement returned");

    Ok(QueryRows { columns, rows })
}
