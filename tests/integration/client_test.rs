//! End-to-end collection queries through the facade crate.

mod helpers;

use serde_json::json;

use helpers::PageServer;
use tcex::TcClient;
use tcex::client::PagerState;
use tcex::client::entities::Indicator;
use tcex::core::types::PageParams;
use tcex::tql::TqlOperator;

#[test]
fn test_indicator_query_with_tag_sub_query() {
    let server = PageServer::with_pages(vec![
        vec![
            json!({"id": 1, "type": "Address", "summary": "10.0.0.1"}),
            json!({"id": 2, "type": "Host", "summary": "bad.example"}),
        ],
        vec![json!({"id": 3, "type": "Host", "summary": "worse.example"})],
    ]);
    let client = TcClient::new(server.clone()).with_result_limit(2);

    let mut indicators = client.collection::<Indicator>();
    {
        let mut filter = indicators.filter();
        filter.confidence(TqlOperator::Geq, 50).unwrap();
        filter.has_tag().name(TqlOperator::Eq, "APT").unwrap();
    }

    let mut iter = indicators.iter();
    let summaries: Vec<String> = iter
        .by_ref()
        .map(|i| i.unwrap().summary.unwrap_or_default())
        .collect();
    assert_eq!(summaries, vec!["10.0.0.1", "bad.example", "worse.example"]);
    assert_eq!(iter.state(), PagerState::Exhausted);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "/v3/indicators");
    assert_eq!(
        requests[0].query_value("tql"),
        Some(r#"confidence >= 50 and hasTag = "name = \"APT\"""#)
    );
    assert_eq!(requests[1].query_value("resultStart"), Some("2"));
}

#[test]
fn test_fields_are_requested_on_every_page() {
    let server = PageServer::with_pages(vec![vec![json!({"id": 7, "summary": "x"})]]);
    let client = TcClient::new(server.clone());
    let indicators = client
        .collection::<Indicator>()
        .with_params(PageParams::new(10, 0).with_fields(["tags", "attributes"]));

    assert_eq!(indicators.iter().count(), 1);
    let fields: Vec<_> = server.requests()[0]
        .query
        .iter()
        .filter(|(k, _)| k == "fields")
        .map(|(_, v)| v.clone())
        .collect();
    assert_eq!(fields, vec!["tags", "attributes"]);
    assert!(server.requests()[0].query_value("tql").is_none());
}
