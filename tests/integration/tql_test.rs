//! Integration tests for TQL rendering through the typed filters.

use tcex::tql::resources::{CaseFilter, IndicatorFilter, TagFilter};
use tcex::tql::{ResourceFilter, ResourceKind, Tql, TqlOperator, TypedFilter};

/// Undo one level of quoting, as the server does when it reads a literal.
fn unquote(literal: &str) -> String {
    let inner = &literal[1..literal.len() - 1];
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn test_tag_filter_with_quotes() {
    let mut tql = Tql::new();
    let mut tags = TagFilter::from_tql(&mut tql);
    tags.id(TqlOperator::Eq, 5).unwrap();
    tags.summary(TqlOperator::Eq, r#"test "value""#).unwrap();

    assert_eq!(tql.render(), r#"id = 5 and summary = "test \"value\"""#);
}

#[test]
fn test_indicator_with_tag_sub_query() {
    let mut tql = Tql::new();
    let mut indicators = IndicatorFilter::from_tql(&mut tql);
    indicators.summary(TqlOperator::Eq, "1.1.1.1").unwrap();
    indicators
        .has_tag()
        .name(TqlOperator::Eq, "Example-Tag")
        .unwrap();

    assert_eq!(
        tql.render(),
        r#"summary = "1.1.1.1" and hasTag = "name = \"Example-Tag\"""#
    );
}

#[test]
fn test_child_mutation_visible_until_parent_renders() {
    let mut tql = Tql::new();
    let mut cases = CaseFilter::from_tql(&mut tql);
    let mut tags = cases.has_tag();
    tags.name(TqlOperator::StartsWith, "APT").unwrap();
    tags.owner_name(TqlOperator::Eq, "Acme").unwrap();

    assert_eq!(
        tql.render(),
        r#"hasTag = "name STARTSWITH \"APT\" and ownerName = \"Acme\"""#
    );
}

#[test]
fn test_nested_sub_queries_quote_each_level() {
    let mut tql = Tql::new();
    let mut cases = CaseFilter::from_tql(&mut tql);
    cases
        .has_artifact()
        .has_indicator()
        .summary(TqlOperator::Eq, "evil.example")
        .unwrap();

    let rendered = tql.render();
    assert_eq!(
        rendered,
        r#"hasArtifact = "hasIndicator = \"summary = \\\"evil.example\\\"\"""#
    );

    let level1 = unquote(rendered.trim_start_matches("hasArtifact = "));
    let level2 = unquote(level1.trim_start_matches("hasIndicator = "));
    assert_eq!(level2, r#"summary = "evil.example""#);
}

#[test]
fn test_quoted_text_round_trips() {
    let original = r#"a "quoted" C:\path"#;
    let mut tql = Tql::new();
    TagFilter::from_tql(&mut tql)
        .name(TqlOperator::Eq, original)
        .unwrap();

    let rendered = tql.render();
    assert_eq!(unquote(rendered.trim_start_matches("name = ")), original);
}

#[test]
fn test_render_is_idempotent() {
    let mut tql = Tql::new();
    let mut indicators = IndicatorFilter::from_tql(&mut tql);
    indicators.rating(TqlOperator::Geq, 3).unwrap();
    indicators.has_tag().name(TqlOperator::Eq, "x").unwrap();

    let first = tql.render();
    assert_eq!(first, tql.render());
    assert_eq!(first, tql.to_string());
}

#[test]
fn test_invalid_operator_for_type_is_rejected() {
    let mut tql = Tql::new();
    let mut indicators = IndicatorFilter::from_tql(&mut tql);

    assert!(
        indicators
            .active_locked(TqlOperator::Contains, true)
            .unwrap_err()
            .is_validation()
    );
    assert!(indicators.confidence(TqlOperator::Like, 50).is_err());
    assert!(indicators.confidence(TqlOperator::Eq, "fifty").is_err());
    assert!(tql.is_empty());
}

#[test]
fn test_list_operators() {
    let mut tql = Tql::new();
    let mut indicators = IndicatorFilter::from_tql(&mut tql);
    indicators
        .type_name(TqlOperator::In, vec!["Address", "Host"])
        .unwrap();
    indicators.id(TqlOperator::NotIn, vec![1_i64, 2, 3]).unwrap();

    assert_eq!(
        tql.render(),
        r#"typeName in ("Address","Host") and id not in (1,2,3)"#
    );
}

#[test]
fn test_date_field_coerced() {
    let mut tql = Tql::new();
    IndicatorFilter::from_tql(&mut tql)
        .date_added(TqlOperator::Geq, "2024-01-02")
        .unwrap();

    assert_eq!(tql.render(), r#"dateAdded >= "2024-01-02T00:00:00""#);
}

#[test]
fn test_dynamic_filter_matches_typed_filter() {
    let mut dynamic = Tql::new();
    let mut filter = ResourceFilter::new(ResourceKind::Indicators, &mut dynamic).unwrap();
    filter.add("summary", TqlOperator::Eq, "1.1.1.1").unwrap();
    filter
        .has("hasTag")
        .unwrap()
        .add("name", TqlOperator::Eq, "Example-Tag")
        .unwrap();

    let mut expected = Tql::new();
    let mut indicators = IndicatorFilter::from_tql(&mut expected);
    indicators.summary(TqlOperator::Eq, "1.1.1.1").unwrap();
    indicators
        .has_tag()
        .name(TqlOperator::Eq, "Example-Tag")
        .unwrap();

    assert_eq!(dynamic, expected);
}
