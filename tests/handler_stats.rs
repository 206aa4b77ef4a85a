mod common;

use hashlink::domain::repositories::MappingStore;

#[tokio::test]
async fn test_stats_new_link_has_zero_clicks() {
    let (server, store) = common::create_test_server();
    common::create_test_link(&store, "fresh", "https://example.com/").await;

    let response = server.get("/stats/fresh").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "fresh");
    assert_eq!(json["long_url"], "https://example.com/");
    assert_eq!(json["clicks"], 0);
}

#[tokio::test]
async fn test_stats_reflects_store_counter() {
    let (server, store) = common::create_test_server();
    common::create_test_link(&store, "busy", "https://example.com/").await;
    for _ in 0..5 {
        store.increment_clicks("busy").await.unwrap();
    }

    let response = server.get("/stats/busy").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 5);
}

#[tokio::test]
async fn test_stats_does_not_count_as_click() {
    let (server, store) = common::create_test_server();
    common::create_test_link(&store, "quiet", "https://example.com/").await;

    server.get("/stats/quiet").await.assert_status_ok();
    let response = server.get("/stats/quiet").await;

    assert_eq!(response.json::<serde_json::Value>()["clicks"], 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/stats/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Statistics not found");
}
