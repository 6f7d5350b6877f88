//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(vec![])
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy(vec![])
}

/// An empty `HAVING` clause.
pub fn empty_having() -> Having {
    Having(vec![])
}

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: String) -> ColumnAlias {
    ColumnAlias { name }
}

/// Generate a qualified column expression referring to a specific table.
pub fn make_column_reference(table: &str, name: &str) -> ColumnReference {
    ColumnReference {
        table: TableName(table.to_string()),
        name: ColumnName(name.to_string()),
    }
}

/// Build a select with a select list and a FROM clause, the rest empty.
pub fn simple_select(select_list: Vec<SelectItem>, from: From) -> Select {
    Select {
        select_list: SelectList(select_list),
        from,
        where_: empty_where(),
        group_by: empty_group_by(),
        having: empty_having(),
    }
}
