//! Type definitions of a SQL AST representation.
//!
//! Statements follow a fixed five-clause template: SELECT, FROM, WHERE,
//! GROUP BY, HAVING. There are no subqueries, window functions or nested
//! joins; aggregate expressions and join conditions arrive from the semantic
//! layer as opaque SQL text.

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
    pub group_by: GroupBy,
    pub having: Having,
}

/// A select list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectList(pub Vec<SelectItem>);

/// A single projected item.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// An aggregate expression with a mandatory alias:
    /// `SUM(sale_price) AS total_revenue`.
    Metric {
        expression: RawExpression,
        alias: ColumnAlias,
    },
    /// A qualified column, aliased only when the alias differs from the raw
    /// column name.
    Column {
        column: ColumnReference,
        alias: Option<ColumnAlias>,
    },
}

/// A FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    /// Select from a single table.
    Table(TableName),
    /// Select from a flat list of join edges, emitted in the given order.
    Joins(Vec<Join>),
}

/// A single join edge: `<parent> JOIN <child> ON <condition>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub parent: TableName,
    pub child: TableName,
    pub on: RawExpression,
}

/// A WHERE clause: comparisons chained with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Vec<Comparison>);

/// A GROUP BY clause over qualified columns.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy(pub Vec<ColumnReference>);

/// A HAVING clause: comparisons chained with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct Having(pub Vec<Comparison>);

/// A binary comparison between a field alias and a literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub field: ColumnAlias,
    pub operator: BinaryOperator,
    pub value: Value,
}

/// A binary comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
}

/// An irreducible literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(serde_json::Number),
    String(String),
}

/// SQL text taken verbatim from the semantic layer, opaque to the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawExpression(pub String);

/// A database table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// A database table's column name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);

/// A qualified `table.column` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnReference {
    pub table: TableName,
    pub name: ColumnName,
}

/// An alias we expose a projected item under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnAlias {
    pub name: String,
}
