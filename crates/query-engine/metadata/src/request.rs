//! The caller-facing query request: named metrics, optional dimensions and
//! filter predicates. The request references names; the semantic layer
//! resolves them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An analytical request against a semantic layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QueryRequest {
    pub metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

/// A single filter predicate over a dimension or metric alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Filter {
    pub field: String,
    pub operator: ComparisonOperator,
    pub value: FilterValue,
}

/// The comparison operators accepted in filter predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ComparisonOperator {
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqualTo,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqualTo,
}

/// A filter comparison value.
///
/// Numbers are emitted unquoted; anything else becomes a single-quoted
/// string literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FilterValue {
    Number(serde_json::Number),
    String(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_request() {
        let request: QueryRequest = serde_json::from_str(
            r#"{
                "metrics": ["total_revenue"],
                "dimensions": ["order_id"],
                "filters": [{"field": "total_revenue", "operator": ">", "value": 1000}]
            }"#,
        )
        .unwrap();

        assert_eq!(request.metrics, vec!["total_revenue"]);
        assert_eq!(request.dimensions, vec!["order_id"]);
        assert_eq!(
            request.filters[0].operator,
            ComparisonOperator::GreaterThan
        );
        assert_eq!(
            request.filters[0].value,
            FilterValue::Number(serde_json::Number::from(1000))
        );
    }

    #[test]
    fn dimensions_and_filters_are_optional() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"metrics": ["count_of_orders"]}"#).unwrap();

        assert!(request.dimensions.is_empty());
        assert!(request.filters.is_empty());
    }

    #[test]
    fn string_values_parse_as_strings() {
        let filter: Filter = serde_json::from_str(
            r#"{"field": "status", "operator": "=", "value": "Complete"}"#,
        )
        .unwrap();

        assert_eq!(filter.operator, ComparisonOperator::Equals);
        assert_eq!(filter.value, FilterValue::String("Complete".to_string()));
    }
}
