//! Predicate classification: split the request's filters into
//! pre-aggregation (WHERE) and post-aggregation (HAVING) groups.

use semql_metadata::metadata::Dimension;
use semql_metadata::request::Filter;

/// Split filters by whether their field names a resolved dimension alias.
///
/// A field matching a dimension alias filters rows before aggregation; any
/// other field is assumed to name a metric alias and filters after
/// aggregation. This is a closed-world heuristic: a filter on a genuinely
/// unknown field is routed to HAVING without a translation error and only
/// surfaces when the warehouse rejects the statement. Relative order within
/// each group follows the request.
pub fn classify_filters<'a>(
    filters: &'a [Filter],
    dimensions: &[Dimension],
) -> (Vec<&'a Filter>, Vec<&'a Filter>) {
    let mut pre_aggregation = vec![];
    let mut post_aggregation = vec![];

    for filter in filters {
        let is_dimension = dimensions
            .iter()
            .any(|dimension| dimension.name == filter.field);
        if is_dimension {
            pre_aggregation.push(filter);
        } else {
            post_aggregation.push(filter);
        }
    }

    (pre_aggregation, post_aggregation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use semql_metadata::request::{ComparisonOperator, FilterValue};

    fn filter(field: &str) -> Filter {
        Filter {
            field: field.to_string(),
            operator: ComparisonOperator::Equals,
            value: FilterValue::String("x".to_string()),
        }
    }

    fn dimension(name: &str) -> Dimension {
        Dimension {
            name: name.to_string(),
            column: name.to_string(),
            table: "orders".to_string(),
        }
    }

    #[test]
    fn dimension_fields_are_pre_aggregation() {
        let filters = [filter("status"), filter("total_revenue"), filter("gender")];
        let dimensions = [dimension("status"), dimension("gender")];

        let (pre, post) = classify_filters(&filters, &dimensions);

        let pre_fields: Vec<&str> = pre.iter().map(|f| f.field.as_str()).collect();
        let post_fields: Vec<&str> = post.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(pre_fields, vec!["status", "gender"]);
        assert_eq!(post_fields, vec!["total_revenue"]);
    }

    #[test]
    fn unknown_fields_fall_through_to_post_aggregation() {
        let filters = [filter("no_such_field")];

        let (pre, post) = classify_filters(&filters, &[dimension("status")]);

        assert!(pre.is_empty());
        assert_eq!(post.len(), 1);
    }
}
