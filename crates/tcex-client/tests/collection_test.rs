//! Pager behavior against a scripted transport.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use helpers::{MockTransport, tags};
use tcex_client::entities::{Indicator, Tag};
use tcex_client::{Collection, Pager, PagerState, TcClient};
use tcex_core::types::PageParams;
use tcex_core::{AppError, ErrorKind};
use tcex_tql::{ResourceKind, TqlOperator};

fn tag_collection(transport: &Arc<MockTransport>, limit: u32) -> Collection<Tag> {
    Collection::new(transport.clone()).with_params(PageParams::new(limit, 0))
}

#[test]
fn test_three_pages_then_exhausted() {
    let transport = MockTransport::new();
    transport
        .push_page(tags(1, 2))
        .push_page(tags(3, 2))
        .push_page(tags(5, 1));
    let collection = tag_collection(&transport, 2);

    let mut iter = collection.iter();
    assert_eq!(iter.state(), PagerState::Created);
    let ids: Vec<i64> = iter
        .by_ref()
        .map(|tag| tag.unwrap().id.unwrap())
        .collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(iter.state(), PagerState::Exhausted);
    assert_eq!(iter.fetches(), 3);
    assert_eq!(transport.request_count(), 3);
    assert!(iter.next().is_none());
    assert_eq!(transport.request_count(), 3);

    let starts: Vec<_> = transport
        .requests()
        .iter()
        .map(|r| r.query_value("resultStart").unwrap().to_string())
        .collect();
    assert_eq!(starts, vec!["0", "2", "4"]);
}

#[test]
fn test_restart_issues_fresh_first_page() {
    let transport = MockTransport::new();
    transport.push_page(tags(1, 1)).push_page(tags(1, 1));
    let collection = tag_collection(&transport, 10);

    let first: Vec<_> = collection.iter().map(|t| t.unwrap()).collect();
    let second: Vec<_> = (&collection).into_iter().map(|t| t.unwrap()).collect();

    assert_eq!(first, second);
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(requests[1].query_value("resultStart"), Some("0"));
}

#[test]
fn test_empty_tql_sends_no_tql_param() {
    let transport = MockTransport::new();
    transport.push_page(vec![]);
    let collection = tag_collection(&transport, 5);

    assert_eq!(collection.iter().count(), 0);
    let request = &transport.requests()[0];
    assert_eq!(request.path, "/v3/tags");
    assert!(request.query_value("tql").is_none());
    assert_eq!(request.query_value("resultLimit"), Some("5"));
}

#[test]
fn test_tql_and_fields_are_sent() {
    let transport = MockTransport::new();
    transport.push_page(vec![json!({"id": 9, "summary": "1.1.1.1", "type": "Address"})]);
    let mut collection: Collection<Indicator> = Collection::new(transport.clone())
        .with_params(PageParams::new(50, 0).with_fields(["tags", "attributes"]));
    collection
        .filter()
        .has_tag()
        .name(TqlOperator::Eq, "Example-Tag")
        .unwrap();

    let indicators: Vec<_> = collection.iter().collect::<Result<_, _>>().unwrap();
    assert_eq!(indicators[0].indicator_type.as_deref(), Some("Address"));

    let request = &transport.requests()[0];
    assert_eq!(request.path, "/v3/indicators");
    assert_eq!(
        request.query_value("tql"),
        Some(r#"hasTag = "name = \"Example-Tag\"""#)
    );
    let fields: Vec<_> = request
        .query
        .iter()
        .filter(|(k, _)| k == "fields")
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(fields, vec!["tags", "attributes"]);
}

#[test]
fn test_invalid_filter_fails_before_any_request() {
    let transport = MockTransport::new();
    let mut collection: Collection<Indicator> = Collection::new(transport.clone());

    let err = collection
        .filter()
        .active_locked(TqlOperator::Contains, true)
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_bad_record_is_skipped() {
    let transport = MockTransport::new();
    transport.push_page(vec![
        json!({"id": 1, "name": "ok"}),
        json!({"id": "oops"}),
        json!({"id": 3, "name": "also ok"}),
    ]);
    let collection = tag_collection(&transport, 10);

    let ids: Vec<_> = collection.iter().map(|t| t.unwrap().id).collect();
    assert_eq!(ids, vec![Some(1), Some(3)]);
}

#[test]
fn test_page_without_data_errors_the_iterator() {
    let transport = MockTransport::new();
    transport.push_page(tags(1, 2)).push(200, json!({"status": "Success"}));
    let collection = tag_collection(&transport, 2);

    let mut iter = collection.iter();
    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().unwrap().is_ok());
    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Decode);
    assert_eq!(iter.state(), PagerState::Errored);
    assert!(iter.next().is_none());
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn test_transport_error_surfaces_once() {
    let transport = MockTransport::new();
    transport.push_error(AppError::transport("connection reset"));
    let collection = tag_collection(&transport, 2);

    let results: Vec<_> = collection.iter().collect();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].as_ref().unwrap_err().kind, ErrorKind::Transport);
}

#[test]
fn test_server_error_status_maps_to_transport() {
    let transport = MockTransport::new();
    transport.push(400, json!({"status": "Failure", "message": "Invalid TQL"}));
    let collection = tag_collection(&transport, 2);

    let err = collection.iter().next().unwrap().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Transport);
    assert!(err.message.contains("Invalid TQL"));
}

#[test]
fn test_result_start_offsets_first_page() {
    let transport = MockTransport::new();
    transport.push_page(tags(11, 1));
    let collection =
        Collection::<Tag>::new(transport.clone()).with_params(PageParams::new(5, 10));

    assert_eq!(collection.iter().count(), 1);
    assert_eq!(transport.requests()[0].query_value("resultStart"), Some("10"));
}

#[test]
fn test_entity_collection_uses_runtime_kind() {
    let transport = MockTransport::new();
    transport.push_page(vec![json!({"id": 4, "summary": "Case timeline", "deleted": false})]);
    let client = TcClient::new(transport.clone()).with_result_limit(25);
    let mut collection = client.entity_collection(ResourceKind::WorkflowEvents);
    collection
        .filter()
        .unwrap()
        .add("summary", TqlOperator::Contains, "timeline")
        .unwrap();

    let entities: Vec<_> = collection.iter().collect::<Result<_, _>>().unwrap();
    assert_eq!(entities[0].kind(), ResourceKind::WorkflowEvents);
    assert_eq!(entities[0].id(), Some(4));

    let request = &transport.requests()[0];
    assert_eq!(request.path, "/v3/workflowEvents");
    assert_eq!(request.query_value("tql"), Some(r#"summary CONTAINS "timeline""#));
    assert_eq!(request.query_value("resultLimit"), Some("25"));
}

#[test]
fn test_zero_page_size_is_clamped() {
    let transport = MockTransport::new();
    transport.push_page(vec![]);
    let collection: Collection<Tag> = Collection::new(transport.clone()).with_params(PageParams {
        result_limit: 0,
        ..Default::default()
    });

    let mut iter = collection.iter();
    assert!(iter.next().is_none());
    assert_eq!(iter.state(), PagerState::Exhausted);
    assert_eq!(iter.fetches(), 1);
    assert_eq!(transport.requests()[0].query_value("resultLimit"), Some("1"));
}

#[test]
fn test_empty_page_ends_walk_even_with_zero_limit() {
    let transport = MockTransport::new();
    transport.push_page(vec![]).push_page(tags(1, 1));
    let params = PageParams {
        result_limit: 0,
        ..Default::default()
    };

    let mut pager = Pager::new(&*transport, "/v3/tags", String::new(), &params);
    assert!(pager.next().is_none());
    assert_eq!(pager.state(), PagerState::Exhausted);
    assert!(pager.next().is_none());
    assert_eq!(transport.request_count(), 1);
}
