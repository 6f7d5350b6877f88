//! Goldenfile tests: translate a request/layer pair and compare the
//! statement against the expected SQL.

mod common;

#[test]
fn single_metric() -> anyhow::Result<()> {
    common::test_translation("single_metric")
}

#[test]
fn metric_with_dimension() -> anyhow::Result<()> {
    common::test_translation("metric_with_dimension")
}

#[test]
fn filter_on_dimension() -> anyhow::Result<()> {
    common::test_translation("filter_on_dimension")
}

#[test]
fn numeric_filter_on_dimension() -> anyhow::Result<()> {
    common::test_translation("numeric_filter_on_dimension")
}

#[test]
fn multiple_dimension_filters() -> anyhow::Result<()> {
    common::test_translation("multiple_dimension_filters")
}

#[test]
fn filter_on_metric() -> anyhow::Result<()> {
    common::test_translation("filter_on_metric")
}

#[test]
fn join_two_tables() -> anyhow::Result<()> {
    common::test_translation("join_two_tables")
}

#[test]
fn dimension_alias() -> anyhow::Result<()> {
    common::test_translation("dimension_alias")
}
