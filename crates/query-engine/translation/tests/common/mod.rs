use std::fs;
use std::path::PathBuf;

use semql_metadata::metadata::SemanticLayer;
use semql_metadata::request::QueryRequest;
use semql_translation::translation;

/// Translate the request/layer pair of a goldenfile test and compare the
/// statement against the expected SQL.
pub fn test_translation(testname: &str) -> anyhow::Result<()> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let request: QueryRequest =
        serde_json::from_str(&fs::read_to_string(directory.join("request.json"))?)?;
    let layer: SemanticLayer =
        serde_json::from_str(&fs::read_to_string(directory.join("layer.json"))?)?;
    let expected = fs::read_to_string(directory.join("expected.sql"))?;

    let statement = translation::query::translate(&layer, &request)?;

    similar_asserts::assert_eq!(expected.trim_end(), statement.sql);

    Ok(())
}
