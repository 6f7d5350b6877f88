//! Errors for query translation.
//!
//! These are all detected before any clause is built; a failed translation
//! never yields a partial statement.

use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The semantic layer resolved no metrics. At least one metric is
    /// required to build a statement.
    #[error("No metrics were resolved from the semantic layer.")]
    EmptyMetricSet,
    /// The resolved metrics and dimensions reference no tables.
    #[error("No tables were resolved from the semantic layer.")]
    NoTablesResolved,
    /// More than one table is referenced but the semantic layer supplies no
    /// join edges.
    #[error("{0} tables are referenced but the semantic layer supplies no join path.")]
    MissingJoinPath(usize),
}
