//! The semantic layer catalog: how metrics and dimensions map to physical
//! tables and columns, and how tables relate via joins.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named aggregate SQL expression bound to a source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Metric {
    /// The alias the aggregate is exposed under, unique within a compilation.
    pub name: String,
    /// The aggregate expression, e.g. `SUM(sale_price)`. Opaque to the
    /// compiler and emitted verbatim.
    #[serde(rename = "sql")]
    pub expression: String,
    pub table: String,
}

/// A named raw column reference bound to a source table, usable for grouping
/// and pre-aggregation filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dimension {
    /// The alias the column is exposed under. May equal the raw column name,
    /// in which case no SQL aliasing is emitted.
    pub name: String,
    #[serde(rename = "sql")]
    pub column: String,
    pub table: String,
}

/// A join edge between a parent and a child table.
///
/// Edges are emitted in the order they are defined; the compiler never
/// reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Join {
    #[serde(rename = "one")]
    pub parent_table: String,
    #[serde(rename = "many")]
    pub child_table: String,
    /// A raw boolean SQL expression, e.g.
    /// `order_items.order_id = orders.order_id`.
    #[serde(rename = "join")]
    pub condition: String,
}

/// The catalog mapping metric and dimension names to physical SQL
/// expressions and describing table join paths.
///
/// A layer arrives pre-resolved: every definition it carries participates in
/// the compilation. It is read-only input and is never mutated by a
/// compilation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SemanticLayer {
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub joins: Vec<Join>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_catalog_wire_format() {
        let layer: SemanticLayer = serde_json::from_str(
            r#"{
                "metrics": [
                    {"name": "total_revenue", "sql": "SUM(sale_price)", "table": "order_items"}
                ],
                "dimensions": [
                    {"name": "ordered_date", "sql": "created_at", "table": "orders"}
                ],
                "joins": [
                    {"one": "orders", "many": "order_items", "join": "order_items.order_id = orders.order_id"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(layer.metrics[0].expression, "SUM(sale_price)");
        assert_eq!(layer.dimensions[0].column, "created_at");
        assert_eq!(layer.joins[0].parent_table, "orders");
        assert_eq!(layer.joins[0].child_table, "order_items");
    }

    #[test]
    fn dimensions_and_joins_default_to_empty() {
        let layer: SemanticLayer = serde_json::from_str(
            r#"{"metrics": [{"name": "m", "sql": "COUNT(id)", "table": "t"}]}"#,
        )
        .unwrap();

        assert!(layer.dimensions.is_empty());
        assert!(layer.joins.is_empty());
    }
}
