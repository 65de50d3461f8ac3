//! Tests for the HTTP adapter module

use super::*;
use crate::error::Error;
use crate::types::StringMap;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn range_headers(value: &str) -> StringMap {
    let mut headers = StringMap::new();
    headers.insert("Range".to_string(), value.to_string());
    headers
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("uphold-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

// ============================================================================
// RawResponse Tests
// ============================================================================

#[test]
fn test_raw_response_header_lookup_is_case_insensitive() {
    let response = RawResponse::ok("[]").header("Content-Range", "0-2/60");
    assert_eq!(response.header_value("content-range"), Some("0-2/60"));
    assert_eq!(response.header_value("CONTENT-RANGE"), Some("0-2/60"));
    assert_eq!(response.header_value("link"), None);
}

#[test]
fn test_raw_response_is_success() {
    assert!(RawResponse::ok("").is_success());
    assert!(RawResponse::with_status(206, "").is_success());
    assert!(!RawResponse::with_status(416, "").is_success());
    assert!(!RawResponse::with_status(500, "").is_success());
}

// ============================================================================
// MockAdapter Tests
// ============================================================================

#[tokio::test]
async fn test_mock_adapter_records_requests() {
    let adapter = MockAdapter::with_body("[]");

    adapter
        .execute("/v0/reserve/ledger", &range_headers("items=0-49"))
        .await
        .unwrap();
    adapter
        .execute("/v0/reserve/ledger", &range_headers("items=50-99"))
        .await
        .unwrap();

    let requests = adapter.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "/v0/reserve/ledger");
    assert_eq!(requests[0].headers["Range"], "items=0-49");
    assert_eq!(adapter.last_headers().unwrap()["Range"], "items=50-99");
}

#[tokio::test]
async fn test_mock_adapter_queue_then_fallback() {
    let adapter = MockAdapter::with_body("fallback")
        .then_fail("connection reset")
        .then_respond(RawResponse::ok("queued"));
    let headers = StringMap::new();

    let err = adapter.execute("/a", &headers).await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));

    assert_eq!(adapter.execute("/a", &headers).await.unwrap().body, "queued");
    assert_eq!(adapter.execute("/a", &headers).await.unwrap().body, "fallback");
    assert_eq!(adapter.request_count(), 3);
}

// ============================================================================
// HttpClient Tests
// ============================================================================

#[tokio::test]
async fn test_http_client_sends_headers_and_returns_lowercase_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/reserve/transactions"))
        .and(header("Range", "items=0-49"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", "0-1/2")
                .set_body_string(r#"[{"id":"a"},{"id":"b"}]"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .execute("/v0/reserve/transactions", &range_headers("items=0-49"))
        .await
        .unwrap();

    assert_eq!(response.status, 206);
    assert_eq!(
        response.headers.get("content-range"),
        Some(&"0-1/2".to_string())
    );
    assert_eq!(response.body, r#"[{"id":"a"},{"id":"b"}]"#);
}

#[tokio::test]
async fn test_http_client_does_not_retry_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/reserve/ledger"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .execute("/v0/reserve/ledger", &StringMap::new())
        .await
        .unwrap_err();

    assert!(err.is_transport());
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_absolute_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url("https://unused.invalid")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .execute(&format!("{}/elsewhere", mock_server.uri()), &StringMap::new())
        .await
        .unwrap();
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_http_client_invalid_url() {
    let client = HttpClient::new().unwrap();
    let err = client
        .execute("no-base-and-relative", &StringMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}
