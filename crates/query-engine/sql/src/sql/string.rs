//! Type definitions of a low-level SQL string representation.

/// A rendered SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
        }
    }

    /// Append regular SQL syntax: keywords, separators, literals.
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a table or column identifier.
    ///
    /// Identifiers come from the semantic layer, which is trusted input, so
    /// they are emitted unquoted.
    pub fn append_identifier(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }
}
