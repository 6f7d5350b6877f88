//! The bundled catalog of example request and semantic layer pairs.

use serde::Deserialize;

use semql_metadata::metadata::SemanticLayer;
use semql_metadata::request::QueryRequest;

/// One example: a request plus the semantic layer that resolves it.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub request: QueryRequest,
    pub layer: SemanticLayer,
}

const ENTRIES: &[&str] = &[
    include_str!("../catalog/single_metric.json"),
    include_str!("../catalog/metric_with_dimension.json"),
    include_str!("../catalog/filter_on_dimension.json"),
    include_str!("../catalog/numeric_filter_on_dimension.json"),
    include_str!("../catalog/multiple_dimension_filters.json"),
    include_str!("../catalog/filter_on_metric.json"),
    include_str!("../catalog/join_two_tables.json"),
    include_str!("../catalog/dimension_alias.json"),
];

/// Parse the bundled examples.
pub fn entries() -> Result<Vec<CatalogEntry>, serde_json::Error> {
    ENTRIES.iter().map(|raw| serde_json::from_str(raw)).collect()
}

#[cfg(test)]
mod tests {
    use semql_translation::translation;

    #[test]
    fn every_bundled_entry_parses_and_translates() {
        for entry in super::entries().unwrap() {
            translation::query::translate(&entry.layer, &entry.request).unwrap();
        }
    }
}
