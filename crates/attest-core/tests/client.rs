//! Integration tests for the API client: credential attachment, error
//! normalization, query construction, and the auth lifecycle, all against a
//! scripted in-memory transport.

use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;

use attest_core::api::{ApiClient, ApiError, RequestDescriptor};
use attest_core::auth::CredentialStore;
use attest_core::models::{InterviewStatus, SearchRequest, TaskFilter, User};
use attest_core::testing::{FakeTransport, MemoryStore};

const BASE: &str = "http://localhost:8000/api/v1";

fn client_with(transport: &Arc<FakeTransport>, store: &Arc<MemoryStore>) -> ApiClient {
    ApiClient::with_parts(BASE, transport.clone(), store.clone()).expect("valid base url")
}

const USER_JSON: &str = r#"{"id":"u1","email":"a@b.com","full_name":"Ada B"}"#;

const INTERVIEW_JSON: &str = r#"{
    "id": "i1",
    "project_id": "p1",
    "title": "Access review",
    "status": "in_progress",
    "created_at": "2026-08-01T09:00:00Z",
    "started_at": "2026-08-01T09:05:00Z"
}"#;

#[tokio::test]
async fn bearer_header_attached_exactly_once() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok-123"));
    let client = client_with(&transport, &store);

    transport.respond(200, USER_JSON);
    let user: User = client.auth().me().await.expect("me");
    assert_eq!(user.email, "a@b.com");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let auth_values: Vec<_> = requests[0].headers.get_all(AUTHORIZATION).iter().collect();
    assert_eq!(auth_values.len(), 1);
    assert_eq!(auth_values[0], "Bearer tok-123");
    assert_eq!(
        requests[0].headers.get(CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(b"application/json".as_ref())
    );
}

#[tokio::test]
async fn no_auth_header_without_credential() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::new());
    let client = client_with(&transport, &store);

    transport.respond(401, r#"{"detail":"not authenticated"}"#);
    let err = client.auth().me().await.expect_err("server rejects");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));

    // The client sent the call anyway, with no Authorization header at all
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn login_persists_access_token() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::new());
    let client = client_with(&transport, &store);

    transport.respond(200, r#"{"access_token":"T","refresh_token":"R"}"#);
    let response = client.auth().login("a@b.com", "pw").await.expect("login");

    assert_eq!(response.access_token, "T");
    assert_eq!(response.refresh_token.as_deref(), Some("R"));
    assert_eq!(store.get().as_deref(), Some("T"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url.path(), "/api/v1/auth/login");
    let body: serde_json::Value =
        serde_json::from_slice(requests[0].body.as_deref().expect("login body")).expect("json");
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["password"], "pw");
}

#[tokio::test]
async fn logout_clears_token_and_sends_nothing() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    client.auth().logout().expect("logout");
    assert_eq!(store.get(), None);
    assert_eq!(transport.request_count(), 0);

    // Logging out twice is fine
    client.auth().logout().expect("logout again");
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn list_filters_omit_empty_values() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(200, "[]");
    let filter = TaskFilter {
        project_id: Some(String::new()),
        status: Some("open".to_string()),
    };
    client.tasks().list(Some(&filter)).await.expect("list");

    let requests = transport.requests();
    assert_eq!(requests[0].url.query(), Some("status=open"));
}

#[tokio::test]
async fn list_without_filters_has_no_query_string() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(200, "[]");
    client.projects().list(None).await.expect("list");

    transport.respond(200, "[]");
    let empty = TaskFilter::default();
    client.tasks().list(Some(&empty)).await.expect("list");

    for request in transport.requests() {
        assert_eq!(request.url.query(), None);
        assert!(!request.url.as_str().contains('?'));
    }
}

#[tokio::test]
async fn server_detail_message_is_surfaced() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(404, r#"{"detail":"not found"}"#);
    let err = client.projects().get("missing").await.expect_err("404");
    assert_eq!(err.to_string(), "not found");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn unparsable_error_body_falls_back_to_status() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(500, "<html>Internal Server Error</html>");
    let err = client.projects().get("p1").await.expect_err("500");
    assert_eq!(err.to_string(), "HTTP 500");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn transport_failure_is_distinct_from_rejection() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.fail_connect("connection refused");
    let err = client.projects().list(None).await.expect_err("no response");
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn interview_lifecycle_events_are_bodyless_posts() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(200, INTERVIEW_JSON);
    let started = client.interviews().start("i1").await.expect("start");
    assert_eq!(started.status, InterviewStatus::InProgress);

    transport.respond(200, INTERVIEW_JSON);
    client.interviews().complete("i1").await.expect("complete");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url.path(), "/api/v1/interviews/i1/start");
    assert!(requests[0].body.is_none());
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].url.path(), "/api/v1/interviews/i1/complete");
    assert!(requests[1].body.is_none());
}

#[tokio::test]
async fn mark_read_is_idempotent_for_the_unread_count() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(200, r#"{"count":2}"#);
    let before = client.notifications().unread_count().await.expect("count");

    // n1 is already read; the server acknowledges without decrementing
    transport.respond(
        200,
        r#"{"id":"n1","title":"Report ready","read":true,"created_at":"2026-08-01T09:00:00Z"}"#,
    );
    let marked = client.notifications().mark_read("n1").await.expect("mark");
    assert!(marked.read);

    transport.respond(200, r#"{"count":2}"#);
    let after = client.notifications().unread_count().await.expect("count");
    assert_eq!(before, after);

    let requests = transport.requests();
    assert_eq!(requests[1].method, Method::POST);
    assert_eq!(requests[1].url.path(), "/api/v1/notifications/n1/read");
    assert!(requests[1].body.is_none());
}

#[tokio::test]
async fn extra_headers_merge_over_defaults() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(200, USER_JSON);
    let request = RequestDescriptor::new(Method::GET, "/auth/me").header(
        HeaderName::from_static("x-request-id"),
        HeaderValue::from_static("req-42"),
    );
    let _: User = client.execute(request).await.expect("me");

    let requests = transport.requests();
    let headers = &requests[0].headers;
    assert_eq!(headers.get("x-request-id").map(|v| v.as_bytes()), Some(b"req-42".as_ref()));
    assert_eq!(
        headers.get(CONTENT_TYPE).map(|v| v.as_bytes()),
        Some(b"application/json".as_ref())
    );
    assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
}

#[tokio::test]
async fn knowledge_search_posts_the_query() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(
        200,
        r#"{"results":[{"id":"k1","title":"Access policy","excerpt":"...","score":0.91}]}"#,
    );
    let results = client
        .knowledge()
        .search(&SearchRequest::new("access control"))
        .await
        .expect("search");
    assert_eq!(results.results.len(), 1);

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url.path(), "/api/v1/knowledge/search");
    let body: serde_json::Value =
        serde_json::from_slice(requests[0].body.as_deref().expect("search body")).expect("json");
    assert_eq!(body["query"], "access control");
    // Absent limit is omitted from the body, not sent as null
    assert!(body.get("limit").is_none());
}

#[tokio::test]
async fn mark_all_read_posts_without_body() {
    let transport = Arc::new(FakeTransport::new());
    let store = Arc::new(MemoryStore::with_token("tok"));
    let client = client_with(&transport, &store);

    transport.respond(200, r#"{"updated":3}"#);
    client.notifications().mark_all_read().await.expect("read-all");

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].url.path(), "/api/v1/notifications/read-all");
    assert!(requests[0].body.is_none());
}
