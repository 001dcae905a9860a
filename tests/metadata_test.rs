//! Integration tests for MetadataService.

use bytes::Bytes;
use rgw_admin::mocks::{MockResponse, MockTransport};
use rgw_admin::services::MetadataService;
use rgw_admin::{AdminConfig, MetadataQuery, Pipeline, RgwError};
use serde_json::json;
use std::sync::Arc;

fn create_test_service(transport: Arc<MockTransport>) -> MetadataService {
    let config = Arc::new(
        AdminConfig::builder()
            .access_key("access")
            .secret_key("secret")
            .server("ceph.example")
            .build()
            .unwrap(),
    );
    MetadataService::new(Arc::new(Pipeline::new(config, transport)))
}

#[tokio::test]
async fn test_unknown_metadata_type_fails_before_dispatch() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let service = create_test_service(transport.clone());

    let result = service.get("bucketttt", MetadataQuery::new()).await;
    assert!(matches!(result, Err(RgwError::InvalidArgument(_))));

    assert!(service.put("bucketttt", "k", "{}").await.is_err());
    assert!(service.delete("bucketttt", "k").await.is_err());
    assert!(service.lock("bucketttt", "k", "abc", 5).await.is_err());
    assert!(service.unlock("bucketttt", "k", "abc").await.is_err());

    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_get_metadata_listing() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body(r#"["logs", "backups"]"#),
    ]));
    let service = create_test_service(transport.clone());

    let listing = service.get("bucket", MetadataQuery::new()).await.unwrap();
    assert_eq!(listing, json!(["logs", "backups"]));

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "GET");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/metadata/bucket?format=json"
    );
}

#[tokio::test]
async fn test_get_metadata_entry_by_key() {
    let entry = json!({"key": "logs", "data": {"bucket": {"name": "logs"}}});
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body(entry.to_string()),
    ]));
    let service = create_test_service(transport.clone());

    let payload = service
        .get("bucket", MetadataQuery::new().with_key("logs"))
        .await
        .unwrap();
    assert_eq!(payload["data"]["bucket"]["name"], "logs");

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/metadata/bucket?format=json&key=logs"
    );
}

#[tokio::test]
async fn test_metadata_marker_is_percent_encoded() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body("[]"),
    ]));
    let service = create_test_service(transport.clone());

    service
        .get(
            "user",
            MetadataQuery::new().with_marker("default.345 -5").with_max_entries(100),
        )
        .await
        .unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/metadata/user?format=json\
         &marker=default.345%20-5&max-entries=100"
    );
}

#[tokio::test]
async fn test_put_metadata_sends_json_body() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok()]));
    let service = create_test_service(transport.clone());

    let body = r#"{"key": "logs", "data": {}}"#;
    service.put("bucket", "logs", body).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "PUT");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/metadata/bucket?key=logs"
    );
    assert_eq!(
        sent.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(sent.body, Some(Bytes::from(body)));
}

#[tokio::test]
async fn test_delete_metadata() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::no_content(),
    ]));
    let service = create_test_service(transport.clone());

    service.delete("user", "ghost").await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "DELETE");
    assert_eq!(sent.url, "https://ceph.example/admin/metadata/user?key=ghost");
}

#[tokio::test]
async fn test_lock_and_unlock_forward_lock_parameters() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let service = create_test_service(transport.clone());

    service.lock("bucket", "logs", "abc", 5).await.unwrap();
    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "POST");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/metadata/bucket?lock=lock&key=logs&lock_id=abc&length=5"
    );

    service.unlock("bucket", "logs", "abc").await.unwrap();
    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/metadata/bucket?unlock=unlock&key=logs&lock_id=abc"
    );
}

#[tokio::test]
async fn test_unlock_missing_lock_classifies_no_such_key() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::error(
        404,
        r#"{"Code": "NoSuchKey"}"#,
    )]));
    let service = create_test_service(transport.clone());

    let result = service.unlock("bucket", "ghost", "abc").await;
    assert!(matches!(result, Err(RgwError::NoSuchKey(_))));
}
