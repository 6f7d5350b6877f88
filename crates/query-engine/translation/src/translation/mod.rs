//! Translate the incoming QueryRequest to a SQL statement.

pub mod error;
pub mod query;
