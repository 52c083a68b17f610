mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use region_resolver::api::handlers::{health_handler, self_test_handler};
use region_resolver::api::handlers::self_test::SAMPLE_EMAILS;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_offline_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_self_test_offline() {
    let app = Router::new()
        .route("/self-test", get(self_test_handler))
        .with_state(common::create_offline_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/self-test").await;

    response.assert_status_ok();

    let items = response.json::<Vec<serde_json::Value>>();
    assert_eq!(items.len(), SAMPLE_EMAILS.len());

    assert_eq!(items[0]["email"], "test@gmail.com");
    assert_eq!(items[0]["domain"], "gmail.com");
    assert_eq!(items[0]["result"], "US");
    assert_eq!(items[0]["method"], "domain-match");

    for item in &items {
        assert!(item.get("error").is_none());
        assert_eq!(item["method"], "domain-match");
    }

    let codes: Vec<&str> = items.iter().filter_map(|i| i["result"].as_str()).collect();
    assert_eq!(
        codes,
        vec!["US", "GB", "RU", "CH", "DE", "FR", "IT", "CN", "JP", "BR"]
    );
}
