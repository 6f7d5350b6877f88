//! Translate an incoming QueryRequest against a SemanticLayer into a SQL
//! statement to be run against the data warehouse.

pub mod translation;
