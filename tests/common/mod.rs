#![allow(dead_code)]

use axum_test::TestServer;
use hashlink::domain::repositories::{MappingStore, PutOutcome};
use hashlink::infrastructure::store::MemoryStore;
use hashlink::routes::router;
use hashlink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), Some(BASE_URL.to_string()));
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, store)
}

pub async fn create_test_link(store: &MemoryStore, code: &str, url: &str) {
    let outcome = store.put_if_absent(code, url).await.unwrap();
    assert_eq!(outcome, PutOutcome::Created);
}
