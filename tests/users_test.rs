//! Integration tests for UsersService.

use rgw_admin::mocks::{MockResponse, MockTransport, TestFixtures};
use rgw_admin::services::UsersService;
use rgw_admin::{
    AdminConfig, CreateKeyRequest, CreateSubuserRequest, CreateUserRequest, GetUserRequest,
    Pipeline, QuotaSettings, RgwError,
};
use std::sync::Arc;

fn create_test_service(transport: Arc<MockTransport>) -> UsersService {
    let config = Arc::new(
        AdminConfig::builder()
            .access_key("access")
            .secret_key("secret")
            .server("ceph.example")
            .build()
            .unwrap(),
    );
    UsersService::new(Arc::new(Pipeline::new(config, transport)))
}

#[tokio::test]
async fn test_get_user_by_uid() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body(TestFixtures::user_info_json("liza")),
    ]));
    let service = create_test_service(transport.clone());

    let user = service.get(GetUserRequest::by_uid("liza")).await.unwrap();
    assert_eq!(user.user_id, "liza");
    assert_eq!(user.keys.len(), 1);
    assert!(!user.is_suspended());

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "GET");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/user?format=json&uid=liza&stats=false&sync=false"
    );
    assert!(sent.headers.contains_key("Authorization"));
}

#[tokio::test]
async fn test_get_user_rejects_uid_and_access_key_together() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let service = create_test_service(transport.clone());

    let request = GetUserRequest {
        access_key: Some("AK".to_string()),
        ..GetUserRequest::by_uid("liza")
    };
    let result = service.get(request).await;

    assert!(matches!(result, Err(RgwError::InvalidArgument(_))));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_create_user_query_assembly() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body(TestFixtures::user_info_json("liza")),
    ]));
    let service = create_test_service(transport.clone());

    let request = CreateUserRequest::new("liza", "Liza")
        .with_email("liza@example.com")
        .with_max_buckets(50);
    let user = service.create(request).await.unwrap();
    assert_eq!(user.user_id, "liza");

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "PUT");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/user?format=json&uid=liza&display-name=Liza\
         &email=liza%40example.com&key-type=s3&generate-key=true&max-buckets=50&suspended=false"
    );
}

#[tokio::test]
async fn test_identical_requests_build_identical_urls() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_with_body(
        TestFixtures::user_info_json("liza"),
    )));
    let service = create_test_service(transport.clone());

    let request = CreateUserRequest::new("liza", "Liza").with_email("liza@example.com");
    service.create(request.clone()).await.unwrap();
    service.create(request).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url, requests[1].url);
}

#[tokio::test]
async fn test_remove_user() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok()]));
    let service = create_test_service(transport.clone());

    service.remove("liza", true).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "DELETE");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/user?format=json&uid=liza&purge-data=true"
    );
}

#[tokio::test]
async fn test_get_missing_user_classifies_no_such_user() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::error(
        404,
        TestFixtures::error_body("NoSuchUser"),
    )]));
    let service = create_test_service(transport.clone());

    let result = service.get(GetUserRequest::by_uid("ghost")).await;
    match result {
        Err(RgwError::NoSuchUser(descriptor)) => assert_eq!(descriptor.code, "NoSuchUser"),
        other => panic!("expected NoSuchUser, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_duplicate_user_classifies_user_exists() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::error(
        409,
        TestFixtures::error_body("UserExists"),
    )]));
    let service = create_test_service(transport.clone());

    let result = service.create(CreateUserRequest::new("liza", "Liza")).await;
    assert!(matches!(result, Err(RgwError::UserExists(_))));
}

#[tokio::test]
async fn test_create_subuser_sends_marker_and_keys_only_when_complete() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_with_body(
        r#"[{"id": "liza:swift", "permissions": "full-control"}]"#,
    )));
    let service = create_test_service(transport.clone());

    // Incomplete key pair: neither half is forwarded.
    let request = CreateSubuserRequest {
        access_key: Some("half".to_string()),
        ..CreateSubuserRequest::new("liza")
            .with_subuser("swift")
            .with_access("full")
    };
    let subusers = service.create_subuser(request).await.unwrap();
    assert_eq!(subusers[0].id, "liza:swift");

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/user?subuser&format=json&uid=liza&subuser=swift\
         &access=full&generate-secret=false"
    );
}

#[tokio::test]
async fn test_create_key_returns_key_list() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body(
            r#"[{"user": "liza", "access_key": "AK", "secret_key": "SK"}]"#,
        ),
    ]));
    let service = create_test_service(transport.clone());

    let keys = service.create_key(CreateKeyRequest::new("liza")).await.unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].access_key, "AK");

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/user?key&format=json&uid=liza&key-type=s3&generate-key=true"
    );
}

#[tokio::test]
async fn test_capabilities_round_trip() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok_with_body(
        r#"[{"type": "usage", "perm": "read"}]"#,
    )));
    let service = create_test_service(transport.clone());

    let caps = service.add_capability("liza", "usage=read").await.unwrap();
    assert_eq!(caps[0].cap_type, "usage");

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "PUT");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/user?caps&format=json&uid=liza&user-caps=usage%3Dread"
    );

    service.remove_capability("liza", "usage=read").await.unwrap();
    assert_eq!(transport.last_request().unwrap().method, "DELETE");
}

#[tokio::test]
async fn test_quota_type_is_validated_before_dispatch() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::ok()));
    let service = create_test_service(transport.clone());

    let result = service.quota("liza", "buckets").await;
    assert!(matches!(result, Err(RgwError::InvalidArgument(_))));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_get_user_quota() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body(TestFixtures::quota_json()),
    ]));
    let service = create_test_service(transport.clone());

    let quota = service.user_quota("liza").await.unwrap();
    assert!(!quota.enabled);
    assert_eq!(quota.max_objects, Some(-1));

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/user?quota&format=json&uid=liza&quota-type=user"
    );
}

#[tokio::test]
async fn test_set_quota_renders_limits_lowercase() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok()]));
    let service = create_test_service(transport.clone());

    let settings = QuotaSettings::new()
        .with_max_size_kb(1024)
        .with_max_objects(10)
        .with_enabled(true);
    service.set_quota("liza", "user", settings).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.method, "PUT");
    assert_eq!(
        sent.url,
        "https://ceph.example/admin/user?quota&format=json&uid=liza&quota-type=user\
         &max-size-kb=1024&max-objects=10&enabled=true"
    );
}

#[tokio::test]
async fn test_list_users_reads_user_metadata() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::ok_with_body(r#"["liza", "noah"]"#),
    ]));
    let service = create_test_service(transport.clone());

    let uids = service.list().await.unwrap();
    assert_eq!(uids, vec!["liza".to_string(), "noah".to_string()]);

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.url, "https://ceph.example/admin/metadata/user?format=json");
}
