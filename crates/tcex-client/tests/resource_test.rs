//! Single-resource CRUD, notifications and staging through a scripted transport.

mod helpers;

use serde_json::json;

use helpers::MockTransport;
use tcex_client::entities::{Case, Tag};
use tcex_client::{Priority, StageData, StageStatus, TcClient};
use tcex_core::ErrorKind;
use tcex_core::traits::transport::Method;
use tcex_tql::ResourceKind;

#[test]
fn test_get_unwraps_data() {
    let transport = MockTransport::new();
    transport.push(200, json!({"data": {"id": 3, "name": "Phishing", "severity": "High"}, "status": "Success"}));
    let client = TcClient::new(transport.clone());

    let case: Case = client.api::<Case>().get(3, &["tasks".to_string()]).unwrap();
    assert_eq!(case.severity.as_deref(), Some("High"));

    let request = &transport.requests()[0];
    assert_eq!(request.path, "/v3/cases/3");
    assert_eq!(request.query_value("fields"), Some("tasks"));
}

#[test]
fn test_get_missing_is_not_found() {
    let transport = MockTransport::new();
    transport.push(404, json!({"status": "Failure", "message": "Not found"}));
    let client = TcClient::new(transport.clone());

    let err = client.api::<Tag>().get(99, &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_create_update_delete() {
    let transport = MockTransport::new();
    transport
        .push(201, json!({"data": {"id": 12, "name": "new"}}))
        .push(200, json!({"data": {"id": 12, "name": "renamed"}}))
        .push(200, json!({"status": "Success"}));
    let api = TcClient::new(transport.clone()).api::<Tag>();

    let tag = Tag {
        name: Some("new".to_string()),
        ..Default::default()
    };
    let mut created = api.create(&tag, Some("Acme")).unwrap();
    assert_eq!(created.id, Some(12));

    created.name = Some("renamed".to_string());
    let updated = api.update(&created).unwrap();
    assert_eq!(updated.name.as_deref(), Some("renamed"));
    api.delete(12).unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].query_value("owner"), Some("Acme"));
    assert_eq!(requests[0].body, Some(json!({"name": "new"})));
    assert_eq!(requests[1].method, Method::Put);
    assert_eq!(requests[1].path, "/v3/tags/12");
    assert_eq!(requests[2].method, Method::Delete);
}

#[test]
fn test_create_and_update_check_id() {
    let transport = MockTransport::new();
    let api = TcClient::new(transport.clone()).api::<Tag>();

    let with_id = Tag {
        id: Some(1),
        ..Default::default()
    };
    assert!(api.create(&with_id, None).unwrap_err().is_validation());
    assert!(api.update(&Tag::default()).unwrap_err().is_validation());
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_get_entity_by_kind() {
    let transport = MockTransport::new();
    transport.push(200, json!({"data": {"id": 5, "name": "Analyst", "assignable": true}}));
    let client = TcClient::new(transport.clone());

    let entity = client.get_entity(ResourceKind::SystemRoles, 5, &[]).unwrap();
    assert_eq!(entity.kind(), ResourceKind::SystemRoles);
    assert_eq!(transport.requests()[0].path, "/v3/security/systemRoles/5");
}

#[test]
fn test_notification_to_recipients() {
    let transport = MockTransport::new();
    transport.push(200, json!({"status": "Success"}));
    let client = TcClient::new(transport.clone());

    let mut notifications = client.notifications();
    notifications.recipients("Alert", "jdoe,asmith", Priority::High);
    notifications.send("Indicator spike").unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.path, "/v2/notifications");
    assert_eq!(
        request.body,
        Some(json!({
            "notificationType": "Alert",
            "priority": "High",
            "isOrganization": false,
            "message": "Indicator spike",
            "recipients": "jdoe,asmith",
        }))
    );
}

#[test]
fn test_notification_400_returns_body() {
    let transport = MockTransport::new();
    transport.push(400, json!({"status": "Failure", "message": "Unknown user"}));
    let client = TcClient::new(transport.clone());

    let mut notifications = client.notifications();
    notifications.org("Broadcast", Priority::Low);
    let body = notifications.send("hello").unwrap();
    assert_eq!(body["message"], "Unknown user");
    assert_eq!(transport.requests()[0].body.as_ref().unwrap()["isOrganization"], true);

    transport.push(500, json!({"message": "boom"}));
    assert_eq!(notifications.send("again").unwrap_err().kind, ErrorKind::Transport);
}

#[test]
fn test_notification_requires_audience() {
    let transport = MockTransport::new();
    let client = TcClient::new(transport.clone());
    assert!(client.notifications().send("x").unwrap_err().is_validation());
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_stage_entities_reports_each_result() {
    let transport = MockTransport::new();
    transport
        .push(201, json!({"data": {"id": 100}}))
        .push(400, json!({"message": "Invalid host"}));
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tc_stage_data.json"),
        r#"[{"type": "tags", "data": {"name": "staged"}},
            {"type": "indicators", "data": {"type": "Host", "hostName": "bad host"}}]"#,
    )
    .unwrap();

    let entities = StageData::from_dir(dir.path()).unwrap();
    let results = TcClient::new(transport.clone())
        .stage(Some("Acme"))
        .entities(&entities);

    assert_eq!(results[0].status, StageStatus::Created);
    assert_eq!(results[0].id, Some(100));
    assert_eq!(results[0].owner.as_deref(), Some("Acme"));
    assert_eq!(results[1].status, StageStatus::Failed);
    assert!(results[1].message.as_deref().unwrap().contains("Invalid host"));
    assert_eq!(transport.requests()[1].path, "/v3/indicators");
}
