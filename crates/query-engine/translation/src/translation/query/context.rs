//! Context and table resolution: merge the request and the semantic layer
//! into one working set and resolve the referenced tables and columns.

use indexmap::IndexSet;

use semql_metadata::metadata::{Dimension, Join, Metric, SemanticLayer};
use semql_metadata::request::{Filter, QueryRequest};
use semql_sql::sql::ast;

use super::filtering;
use crate::translation::error::Error;

/// Everything the clause emitters need, resolved up front.
///
/// The semantic layer arrives pre-resolved, so every definition it carries
/// participates in the compilation; no catalog lookup happens here.
#[derive(Debug, Clone)]
pub struct CompilationContext<'a> {
    pub metrics: &'a [Metric],
    pub dimensions: &'a [Dimension],
    pub joins: &'a [Join],
    /// Referenced tables, deduplicated in first-seen order: metrics first,
    /// then dimensions.
    pub tables: Vec<ast::TableName>,
    /// Qualified columns of the resolved dimensions, deduplicated in
    /// first-seen order. Metrics are aggregate expressions and contribute no
    /// raw columns.
    pub columns: Vec<ast::ColumnReference>,
    /// Filters that apply before aggregation (WHERE).
    pub pre_aggregation_filters: Vec<&'a Filter>,
    /// Filters that apply after aggregation (HAVING).
    pub post_aggregation_filters: Vec<&'a Filter>,
}

/// Resolve a compilation context from a request and a semantic layer.
pub fn resolve<'a>(
    layer: &'a SemanticLayer,
    request: &'a QueryRequest,
) -> Result<CompilationContext<'a>, Error> {
    if layer.metrics.is_empty() {
        return Err(Error::EmptyMetricSet);
    }

    // An IndexSet deduplicates while keeping first-seen order, so repeated
    // compilations of the same inputs emit identical SQL.
    let mut tables: IndexSet<ast::TableName> = IndexSet::new();
    for metric in &layer.metrics {
        tables.insert(ast::TableName(metric.table.clone()));
    }
    for dimension in &layer.dimensions {
        tables.insert(ast::TableName(dimension.table.clone()));
    }
    if tables.is_empty() {
        return Err(Error::NoTablesResolved);
    }

    let mut columns: IndexSet<ast::ColumnReference> = IndexSet::new();
    for dimension in &layer.dimensions {
        columns.insert(ast::ColumnReference {
            table: ast::TableName(dimension.table.clone()),
            name: ast::ColumnName(dimension.column.clone()),
        });
    }

    let (pre_aggregation_filters, post_aggregation_filters) =
        filtering::classify_filters(&request.filters, &layer.dimensions);

    Ok(CompilationContext {
        metrics: &layer.metrics,
        dimensions: &layer.dimensions,
        joins: &layer.joins,
        tables: tables.into_iter().collect(),
        columns: columns.into_iter().collect(),
        pre_aggregation_filters,
        post_aggregation_filters,
    })
}
