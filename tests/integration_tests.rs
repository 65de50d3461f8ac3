//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: UpholdClient → reqwest adapter → Range
//! headers → content-range parsing → typed models

use futures::TryStreamExt;
use serde_json::json;
use uphold_client::http::{HttpAdapter, HttpClient, HttpClientConfig};
use uphold_client::reserve::Transaction;
use uphold_client::{ClientConfig, Error, UpholdClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transactions(ids: &[&str]) -> serde_json::Value {
    json!(ids
        .iter()
        .map(|id| json!({ "id": id, "type": "deposit", "status": "completed" }))
        .collect::<Vec<_>>())
}

fn client_for(server: &MockServer, page_size: u64) -> UpholdClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_page_size(page_size);
    UpholdClient::new(config).unwrap()
}

async fn mount_page(server: &MockServer, range: &str, content_range: &str, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/v0/reserve/transactions"))
        .and(header("Range", range))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Content-Range", content_range)
                .set_body_json(transactions(ids)),
        )
        .mount(server)
        .await;
}

// ============================================================================
// Paginator over HTTP
// ============================================================================

#[tokio::test]
async fn test_elements_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/reserve/transactions"))
        .and(header("Range", "items=0-49"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transactions(&["foobar", "foobiz"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 50);
    let paginator = client.reserve().get_transactions();

    let first: Vec<String> = paginator
        .elements()
        .await
        .unwrap()
        .iter()
        .map(|t| t.id.clone())
        .collect();
    let again = paginator.elements().await.unwrap().len();

    assert_eq!(first, vec!["foobar", "foobiz"]);
    assert_eq!(again, 2);
}

#[tokio::test]
async fn test_count_and_has_next_over_http() {
    let server = MockServer::start().await;
    mount_page(&server, "items=0-1", "0-1/5", &["a", "b"]).await;

    let client = client_for(&server, 2);
    let paginator = client.reserve().get_transactions();

    assert_eq!(paginator.count().await.unwrap(), 5);
    assert!(paginator.has_next().await.unwrap());
}

#[tokio::test]
async fn test_walk_all_pages_over_http() {
    let server = MockServer::start().await;
    mount_page(&server, "items=0-1", "0-1/5", &["a", "b"]).await;
    mount_page(&server, "items=2-3", "2-3/5", &["c", "d"]).await;
    mount_page(&server, "items=4-5", "4-4/5", &["e"]).await;

    let client = client_for(&server, 2);
    let mut paginator = client.reserve().get_transactions();

    let mut ids = Vec::new();
    loop {
        let page = paginator.get_next().await.unwrap();
        ids.extend(page.into_iter().map(|t| t.id));
        if !paginator.has_next().await.unwrap() {
            break;
        }
    }

    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_into_pages_over_http() {
    let server = MockServer::start().await;
    mount_page(&server, "items=0-1", "items 0-1/3", &["a", "b"]).await;
    mount_page(&server, "items=2-3", "items 2-2/3", &["c"]).await;

    let client = client_for(&server, 2);
    let pages: Vec<Vec<Transaction>> = client
        .reserve()
        .get_transactions()
        .into_pages()
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<&str> = pages.iter().flatten().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/reserve/ledger"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 50);
    let paginator = client.reserve().get_ledger();
    let window = paginator.current_window();

    let err = paginator.count().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert_eq!(paginator.current_window(), window);
}

#[tokio::test]
async fn test_range_not_satisfiable_surfaces_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/reserve/transactions"))
        .respond_with(ResponseTemplate::new(416))
        .mount(&server)
        .await;

    let client = client_for(&server, 50);
    let mut paginator = client.reserve().get_transactions();

    let err = paginator.get_next().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), Some(416));
}

// ============================================================================
// Plain reads over HTTP
// ============================================================================

#[tokio::test]
async fn test_get_transaction_by_id_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/reserve/transactions/foobar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "foobar",
            "createdAt": "2015-05-01T10:00:00.000Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, 50);
    let transaction = client
        .reserve()
        .get_transaction_by_id("foobar")
        .await
        .unwrap();

    assert_eq!(transaction.id, "foobar");
    assert!(transaction.created_at.is_some());
}

#[tokio::test]
async fn test_get_statistics_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/reserve/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "currency": "USD", "values": [], "totals": { "assets": "100.00" } }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server, 50);
    let statistics = client.reserve().get_statistics().await.unwrap();

    assert_eq!(statistics.len(), 1);
    assert_eq!(statistics[0].currency, "USD");
    assert_eq!(
        statistics[0].totals.as_ref().unwrap().assets.as_deref(),
        Some("100.00")
    );
}

// ============================================================================
// HTTP adapter
// ============================================================================

#[tokio::test]
async fn test_http_client_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("User-Agent", "integration/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .user_agent("integration/1.0")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client.execute("/ping", &Default::default()).await.unwrap();
    assert_eq!(response.body, "pong");
}
