//! Representation and building of SQL statements.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
