//! Router-level tests for REST Relay
//!
//! Requests go through the full axum router with `oneshot`; upstream APIs are
//! wiremock servers.

use super::{post_json, TestRelay};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_health_reports_variable_count() {
    let relay = TestRelay::new(&[("host", "example.com"), ("version", "v1")]);

    let response = relay
        .router()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"status": "ok", "variables": 2}));
}

#[tokio::test]
async fn test_call_api_proxies_substituted_url() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": ["ana", "bo"]})))
        .expect(1)
        .mount(&upstream)
        .await;

    let base = upstream.uri();
    let relay = TestRelay::new(&[("baseUrl", base.as_str()), ("version", "v1")]);

    let (status, body) = post_json(
        relay.router(),
        "/call-api",
        &json!({"apiUrl": "{{baseUrl}}/{{version}}/users?page=2"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"users": ["ana", "bo"]}));
}

#[tokio::test]
async fn test_call_api_missing_url() {
    let relay = TestRelay::new(&[]);

    let (status, body) = post_json(relay.router(), "/call-api", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "API URL is required."}));

    let (status, _) = post_json(relay.router(), "/call-api", &json!({"apiUrl": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_call_api_malformed_body() {
    let relay = TestRelay::new(&[]);

    let response = relay
        .router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/call-api")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn test_call_api_upstream_404_passes_details() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"msg": "not found"})))
        .mount(&upstream)
        .await;

    let relay = TestRelay::new(&[]);
    let (status, body) = post_json(
        relay.router(),
        "/call-api",
        &json!({"apiUrl": format!("{}/nope", upstream.uri())}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], json!(404));
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("404 Not Found"));
    assert!(details.contains("not found"));
}

#[tokio::test]
async fn test_call_api_upstream_non_json() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
        .mount(&upstream)
        .await;

    let relay = TestRelay::new(&[]);
    let (status, body) =
        post_json(relay.router(), "/call-api", &json!({"apiUrl": upstream.uri()})).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.get("status").is_none());
    assert!(body["details"]
        .as_str()
        .unwrap()
        .starts_with("Response body is not valid JSON"));
}

#[tokio::test]
async fn test_save_json_writes_file() {
    let relay = TestRelay::new(&[]);

    let (status, body) = post_json(
        relay.router(),
        "/save-json",
        &json!({
            "jsonData": "{\n  \"id\": 7\n}",
            "originalUrl": "https://api.example.com/{{version}}/orders?limit=5"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], json!("orders.json"));

    let written = std::fs::read_to_string(relay.downloads.path().join("orders.json")).unwrap();
    assert_eq!(written, "{\n  \"id\": 7\n}");
}

#[tokio::test]
async fn test_save_json_invalid_content() {
    let relay = TestRelay::new(&[]);

    let (status, body) = post_json(
        relay.router(),
        "/save-json",
        &json!({"jsonData": "Error: upstream failed", "originalUrl": "https://x.io/a"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("The submitted content is not valid JSON."));
    assert!(!relay.downloads.path().join("a.json").exists());
}

#[tokio::test]
async fn test_save_json_missing_data() {
    let relay = TestRelay::new(&[]);

    let (status, body) = post_json(relay.router(), "/save-json", &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "jsonData is required"}));
}

#[tokio::test]
async fn test_static_index_served() {
    let relay = TestRelay::new(&[]);

    let response = relay
        .router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&body).contains("REST Relay"));
    assert!(relay.public.path().join("index.html").exists());
}
