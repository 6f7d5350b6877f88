//! Translate a query request into a single SQL statement.
//!
//! Translation runs in four stages: context and table resolution
//! ([`context`]), predicate classification ([`filtering`]), clause
//! construction ([`root`]) and string assembly (here).

pub mod context;
pub mod filtering;
pub mod root;

use semql_metadata::metadata::SemanticLayer;
use semql_metadata::request::QueryRequest;
use semql_sql::sql;

use crate::translation::error::Error;

/// Compile a query request against a semantic layer into a SQL statement.
///
/// This is a pure function of its two inputs: it performs no I/O, holds no
/// state between calls, and produces byte-identical output for identical
/// inputs.
pub fn translate(
    layer: &SemanticLayer,
    request: &QueryRequest,
) -> Result<sql::string::SQL, Error> {
    let context = context::resolve(layer, request)?;
    let select = root::translate_query(&context)?;

    let mut statement = sql::string::SQL::new();
    select.to_sql(&mut statement);

    tracing::debug!(generated_sql = %statement.sql, "translated query request");

    Ok(statement)
}
