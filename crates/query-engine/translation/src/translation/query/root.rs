//! Build the SELECT, FROM, WHERE, GROUP BY and HAVING clauses from a
//! resolved compilation context.

use semql_metadata::request::{ComparisonOperator, Filter, FilterValue};
use semql_sql::sql::{ast, helpers};

use super::context::CompilationContext;
use crate::translation::error::Error;

/// Construct the statement AST for a resolved context.
pub fn translate_query(context: &CompilationContext) -> Result<ast::Select, Error> {
    let select_list = translate_select_list(context);
    let from = translate_from(context)?;

    let mut select = helpers::simple_select(select_list, from);
    select.where_ = ast::Where(translate_comparisons(&context.pre_aggregation_filters));
    select.group_by = ast::GroupBy(context.columns.clone());
    select.having = ast::Having(translate_comparisons(&context.post_aggregation_filters));

    Ok(select)
}

/// Project each metric as `expression AS name`, then each dimension as
/// `table.column`, aliased only when the alias differs from the raw column.
fn translate_select_list(context: &CompilationContext) -> Vec<ast::SelectItem> {
    let mut items = Vec::with_capacity(context.metrics.len() + context.dimensions.len());

    for metric in context.metrics {
        items.push(ast::SelectItem::Metric {
            expression: ast::RawExpression(metric.expression.clone()),
            alias: helpers::make_column_alias(metric.name.clone()),
        });
    }

    for dimension in context.dimensions {
        let alias = (dimension.name != dimension.column)
            .then(|| helpers::make_column_alias(dimension.name.clone()));
        items.push(ast::SelectItem::Column {
            column: helpers::make_column_reference(&dimension.table, &dimension.column),
            alias,
        });
    }

    items
}

/// A single table is selected directly; multiple tables require the layer's
/// join edges, emitted in their given order.
fn translate_from(context: &CompilationContext) -> Result<ast::From, Error> {
    match context.tables.as_slice() {
        [table] => Ok(ast::From::Table(table.clone())),
        tables => {
            if context.joins.is_empty() {
                return Err(Error::MissingJoinPath(tables.len()));
            }
            Ok(ast::From::Joins(
                context
                    .joins
                    .iter()
                    .map(|join| ast::Join {
                        parent: ast::TableName(join.parent_table.clone()),
                        child: ast::TableName(join.child_table.clone()),
                        on: ast::RawExpression(join.condition.clone()),
                    })
                    .collect(),
            ))
        }
    }
}

fn translate_comparisons(filters: &[&Filter]) -> Vec<ast::Comparison> {
    filters
        .iter()
        .map(|filter| ast::Comparison {
            field: helpers::make_column_alias(filter.field.clone()),
            operator: translate_operator(filter.operator),
            value: translate_value(&filter.value),
        })
        .collect()
}

fn translate_operator(operator: ComparisonOperator) -> ast::BinaryOperator {
    match operator {
        ComparisonOperator::Equals => ast::BinaryOperator::Equals,
        ComparisonOperator::NotEquals => ast::BinaryOperator::NotEquals,
        ComparisonOperator::LessThan => ast::BinaryOperator::LessThan,
        ComparisonOperator::LessThanOrEqualTo => ast::BinaryOperator::LessThanOrEqualTo,
        ComparisonOperator::GreaterThan => ast::BinaryOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEqualTo => ast::BinaryOperator::GreaterThanOrEqualTo,
    }
}

fn translate_value(value: &FilterValue) -> ast::Value {
    match value {
        FilterValue::Number(number) => ast::Value::Number(number.clone()),
        FilterValue::String(string) => ast::Value::String(string.clone()),
    }
}
