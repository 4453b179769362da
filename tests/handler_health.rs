mod common;

use applink::api::handlers::health_handler;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_health_with_memory_registry() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["checks"]["storage"]["status"], json!("ok"));
    assert!(body["version"].is_string());
}
