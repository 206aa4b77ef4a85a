mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use hashlink::domain::repositories::{MappingStore, PutOutcome, StoreError, StoreResult};
use hashlink::routes::router;
use hashlink::state::AppState;
use std::sync::Arc;

/// Store whose backend never answers.
struct DownStore;

#[async_trait]
impl MappingStore for DownStore {
    async fn exists(&self, _code: &str) -> StoreResult<bool> {
        Err(StoreError::Connection("down".to_string()))
    }

    async fn put_if_absent(&self, _code: &str, _long_url: &str) -> StoreResult<PutOutcome> {
        Err(StoreError::Connection("down".to_string()))
    }

    async fn get(&self, _code: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("down".to_string()))
    }

    async fn increment_clicks(&self, _code: &str) -> StoreResult<u64> {
        Err(StoreError::Connection("down".to_string()))
    }

    async fn clicks(&self, _code: &str) -> StoreResult<u64> {
        Err(StoreError::Connection("down".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

fn down_server() -> TestServer {
    let state = AppState::new(Arc::new(DownStore), Some(common::BASE_URL.to_string()));
    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let server = down_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let server = down_server();

    let response = server.get("/anything").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Storage error");
}

#[tokio::test]
async fn test_shorten_with_store_down_is_internal_error() {
    let server = down_server();

    let response = server
        .post("/")
        .form(&[("long_url", "https://example.com/page")])
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
