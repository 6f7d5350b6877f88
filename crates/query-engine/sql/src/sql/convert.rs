//! Convert a SQL AST to a low-level SQL string.
//!
//! Non-empty clauses are emitted in the fixed order SELECT, FROM, WHERE,
//! GROUP BY, HAVING, separated by single spaces. Absent clauses are omitted
//! entirely rather than rendered as empty markers.

use super::ast::*;
use super::string::SQL;

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");
        self.select_list.to_sql(sql);
        sql.append_syntax(" ");
        self.from.to_sql(sql);
        self.where_.to_sql(sql);
        self.group_by.to_sql(sql);
        self.having.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        for (index, item) in self.0.iter().enumerate() {
            item.to_sql(sql);
            if index < (self.0.len() - 1) {
                sql.append_syntax(", ");
            }
        }
    }
}

impl SelectItem {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectItem::Metric { expression, alias } => {
                expression.to_sql(sql);
                sql.append_syntax(" AS ");
                alias.to_sql(sql);
            }
            SelectItem::Column { column, alias } => {
                column.to_sql(sql);
                if let Some(alias) = alias {
                    sql.append_syntax(" AS ");
                    alias.to_sql(sql);
                }
            }
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        match self {
            From::Table(table) => table.to_sql(sql),
            From::Joins(joins) => {
                for (index, join) in joins.iter().enumerate() {
                    join.to_sql(sql);
                    if index < (joins.len() - 1) {
                        sql.append_syntax("\n");
                    }
                }
            }
        }
    }
}

impl Join {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.parent.to_sql(sql);
        sql.append_syntax(" JOIN ");
        self.child.to_sql(sql);
        sql.append_syntax(" ON ");
        self.on.to_sql(sql);
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(comparisons) = self;
        if !comparisons.is_empty() {
            sql.append_syntax(" WHERE ");
            and_separated(comparisons, sql);
        }
    }
}

impl GroupBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        let GroupBy(columns) = self;
        if !columns.is_empty() {
            sql.append_syntax(" GROUP BY ");
            for (index, column) in columns.iter().enumerate() {
                column.to_sql(sql);
                if index < (columns.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl Having {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Having(comparisons) = self;
        if !comparisons.is_empty() {
            sql.append_syntax(" HAVING ");
            and_separated(comparisons, sql);
        }
    }
}

/// Render comparisons chained with AND, no trailing separator.
fn and_separated(comparisons: &[Comparison], sql: &mut SQL) {
    for (index, comparison) in comparisons.iter().enumerate() {
        comparison.to_sql(sql);
        if index < (comparisons.len() - 1) {
            sql.append_syntax(" AND ");
        }
    }
}

impl Comparison {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.field.to_sql(sql);
        self.operator.to_sql(sql);
        self.value.to_sql(sql);
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
            BinaryOperator::NotEquals => sql.append_syntax(" != "),
            BinaryOperator::LessThan => sql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => sql.append_syntax(" <= "),
            BinaryOperator::GreaterThan => sql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Value::Number(number) => sql.append_syntax(&number.to_string()),
            // String literals are inlined verbatim, without escaping.
            Value::String(string) => {
                sql.append_syntax("'");
                sql.append_syntax(string);
                sql.append_syntax("'");
            }
        }
    }
}

impl RawExpression {
    pub fn to_sql(&self, sql: &mut SQL) {
        let RawExpression(expression) = self;
        sql.append_syntax(expression);
    }
}

// names

impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let TableName(name) = self;
        sql.append_identifier(name);
    }
}

impl ColumnReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.table.to_sql(sql);
        sql.append_syntax(".");
        let ColumnName(name) = &self.name;
        sql.append_identifier(name);
    }
}

impl ColumnAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::super::helpers;
    use super::*;

    fn render(select: &Select) -> String {
        let mut sql = SQL::new();
        select.to_sql(&mut sql);
        sql.sql
    }

    fn metric_item(expression: &str, alias: &str) -> SelectItem {
        SelectItem::Metric {
            expression: RawExpression(expression.to_string()),
            alias: helpers::make_column_alias(alias.to_string()),
        }
    }

    #[test]
    fn renders_a_bare_aggregate_select() {
        let select = helpers::simple_select(
            vec![metric_item("SUM(sale_price)", "total_revenue")],
            From::Table(TableName("order_items".to_string())),
        );

        assert_eq!(
            render(&select),
            "SELECT SUM(sale_price) AS total_revenue FROM order_items"
        );
    }

    #[test]
    fn column_alias_is_emitted_only_when_present() {
        let mut sql = SQL::new();
        SelectItem::Column {
            column: helpers::make_column_reference("orders", "created_at"),
            alias: Some(helpers::make_column_alias("ordered_date".to_string())),
        }
        .to_sql(&mut sql);
        assert_eq!(sql.sql, "orders.created_at AS ordered_date");

        let mut sql = SQL::new();
        SelectItem::Column {
            column: helpers::make_column_reference("orders", "status"),
            alias: None,
        }
        .to_sql(&mut sql);
        assert_eq!(sql.sql, "orders.status");
    }

    #[test]
    fn join_edges_are_newline_separated() {
        let mut sql = SQL::new();
        From::Joins(vec![
            Join {
                parent: TableName("orders".to_string()),
                child: TableName("order_items".to_string()),
                on: RawExpression("order_items.order_id = orders.order_id".to_string()),
            },
            Join {
                parent: TableName("users".to_string()),
                child: TableName("orders".to_string()),
                on: RawExpression("orders.user_id = users.user_id".to_string()),
            },
        ])
        .to_sql(&mut sql);

        assert_eq!(
            sql.sql,
            "FROM orders JOIN order_items ON order_items.order_id = orders.order_id\n\
             users JOIN orders ON orders.user_id = users.user_id"
        );
    }

    #[test]
    fn comparisons_chain_with_and_and_quote_strings_only() {
        let mut sql = SQL::new();
        Where(vec![
            Comparison {
                field: helpers::make_column_alias("status".to_string()),
                operator: BinaryOperator::Equals,
                value: Value::String("Complete".to_string()),
            },
            Comparison {
                field: helpers::make_column_alias("num_of_item".to_string()),
                operator: BinaryOperator::GreaterThan,
                value: Value::Number(serde_json::Number::from(1)),
            },
        ])
        .to_sql(&mut sql);

        assert_eq!(sql.sql, " WHERE status = 'Complete' AND num_of_item > 1");
    }

    #[test]
    fn empty_clauses_are_omitted() {
        let mut sql = SQL::new();
        Where(vec![]).to_sql(&mut sql);
        GroupBy(vec![]).to_sql(&mut sql);
        Having(vec![]).to_sql(&mut sql);
        assert_eq!(sql.sql, "");
    }
}
