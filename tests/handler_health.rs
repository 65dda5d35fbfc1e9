mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use login_portal::api::handlers::health_handler;
use login_portal::domain::providers::OauthReply;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _store) = common::create_test_state(OauthReply::success(), &[]);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
    assert_eq!(json["checks"]["usage_provider"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _store) = common::create_test_state(OauthReply::success(), &[]);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("session_store").is_some());
    assert!(json["checks"].get("usage_provider").is_some());
}
