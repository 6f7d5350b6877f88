//! SQL AST types and rendering for the five-clause statement template.

pub mod sql;
