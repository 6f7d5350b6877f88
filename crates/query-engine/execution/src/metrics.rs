//! Metrics setup and update for query execution.

use prometheus::core::{AtomicU64, GenericCounter};

/// The metrics we track about executed queries.
#[derive(Debug, Clone)]
pub struct Metrics {
    query_total: GenericCounter<AtomicU64>,
    query_errors_total: GenericCounter<AtomicU64>,
}

impl Metrics {
    /// Create the metrics and register them with the provided Prometheus
    /// registry.
    pub fn initialize(
        metrics_registry: &mut prometheus::Registry,
    ) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "semql_query_total",
            "Total queries executed against the warehouse.",
        )?;

        let query_errors_total = add_int_counter_metric(
            metrics_registry,
            "semql_query_errors_total",
            "Total queries rejected or failed by the warehouse.",
        )?;

        Ok(Metrics {
            query_total,
            query_errors_total,
        })
    }

    pub fn record_successful_query(&self) {
        self.query_total.inc();
    }

    pub fn record_failed_query(&self) {
        self.query_total.inc();
        self.query_errors_total.inc();
    }
}

/// Create a new int counter metric and register it with the provided
/// Prometheus registry.
fn add_int_counter_metric(
    metrics_registry: &mut prometheus::Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<GenericCounter<AtomicU64>, prometheus::Error> {
    let int_counter =
        prometheus::IntCounter::with_opts(prometheus::Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}
