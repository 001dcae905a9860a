//! Integration tests for UsageService.

use rgw_admin::mocks::{MockResponse, MockTransport};
use rgw_admin::services::UsageService;
use rgw_admin::{AdminConfig, GetUsageRequest, Pipeline, TrimUsageRequest};
use serde_json::json;
use std::sync::Arc;

fn create_test_service(transport: Arc<MockTransport>) -> UsageService {
    let config = Arc::new(
        AdminConfig::builder()
            .access_key("access")
            .secret_key("secret")
            .server("ceph.example")
            .build()
            .unwrap(),
    );
    UsageService::new(Arc::new(Pipeline::new(config, transport)))
}

#[tokio::test]
async fn test_get_usage_with_window() {
    let usage = json!({"entries": [], "summary": []});
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body(usage.to_string()),
    ]));
    let service = create_test_service(transport.clone());

    let request = GetUsageRequest::new()
        .with_uid("liza")
        .with_start("2026-08-01 00:00:00")
        .with_end("2026-08-06 00:00:00")
        .with_entries(true)
        .with_summary(true);
    let payload = service.get(request).await.unwrap();
    assert_eq!(payload, usage);

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "GET");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/usage?format=json&uid=liza\
         &start=2026-08-01%2000%3A00%3A00&end=2026-08-06%2000%3A00%3A00\
         &show-entries=true&show-summary=true"
    );
}

#[tokio::test]
async fn test_get_usage_defaults_omit_bounds() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body("{}"),
    ]));
    let service = create_test_service(transport.clone());

    service.get(GetUsageRequest::new()).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/usage?format=json&show-entries=false&show-summary=false"
    );
}

#[tokio::test]
async fn test_trim_usage_remove_all() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::no_content(),
    ]));
    let service = create_test_service(transport.clone());

    service
        .trim(TrimUsageRequest::new().with_remove_all(true))
        .await
        .unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "DELETE");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/usage?format=json&remove-all=true"
    );
}
