mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use login_portal::domain::providers::OauthReply;
use login_portal::infrastructure::session::SessionStore;
use login_portal::web::handlers::token_login_handler;
use serde_json::json;

fn token_app(state: login_portal::state::AppState) -> Router {
    Router::new()
        .route("/login/token", post(token_login_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_token_login_json_success_exact_body() {
    let (state, store) = common::create_test_state(OauthReply::success(), &[]);
    let server = TestServer::new(token_app(state)).unwrap();

    let response = server
        .post("/login/token")
        .form(&[
            ("usertoken", "tok-abc"),
            ("carid", "carid3"),
            ("resptype", "json"),
        ])
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), r#"{"code":1,"msg":"login successful"}"#);

    let cookie = common::set_cookie_header(&response).unwrap();
    assert!(cookie.contains("Max-Age=432000"));

    let session_id = common::session_id_from_cookie(&response).unwrap();
    let session = store.get(&session_id).await.unwrap().unwrap();
    assert_eq!(session.usertoken, "tok-abc");
    assert_eq!(session.carid, "carid3");
}

#[tokio::test]
async fn test_token_login_trusts_submitted_carid() {
    // Counts heavily favor carid2; the token flow must not consult them.
    let (state, store) = common::create_test_state(
        OauthReply::success(),
        &[("carid1", 1), ("carid2", 999), ("carid3", 1)],
    );
    let server = TestServer::new(token_app(state)).unwrap();

    let response = server
        .post("/login/token")
        .form(&[
            ("usertoken", "tok-abc"),
            ("carid", "carid1"),
            ("resptype", "json"),
        ])
        .await;

    response.assert_status_ok();

    let session_id = common::session_id_from_cookie(&response).unwrap();
    let session = store.get(&session_id).await.unwrap().unwrap();
    assert_eq!(session.carid, "carid1");
}

#[tokio::test]
async fn test_token_login_json_failure() {
    let (state, store) =
        common::create_test_state(OauthReply::failure("bad credentials"), &[("carid1", 5)]);
    let server = TestServer::new(token_app(state)).unwrap();

    let response = server
        .post("/login/token")
        .form(&[("usertoken", "wrong"), ("resptype", "json")])
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body, json!({"code": 0, "msg": "bad credentials"}));

    assert!(common::set_cookie_header(&response).is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_token_login_redirects_without_resptype() {
    let (state, store) = common::create_test_state(OauthReply::success(), &[]);
    let server = TestServer::new(token_app(state)).unwrap();

    let response = server
        .post("/login/token")
        .form(&[("usertoken", "tok-abc"), ("carid", "carid2")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let session_id = common::session_id_from_cookie(&response).unwrap();
    let session = store.get(&session_id).await.unwrap().unwrap();
    assert_eq!(session.carid, "carid2");
}

#[tokio::test]
async fn test_token_login_failure_rerenders_page_without_resptype() {
    let (state, store) = common::create_test_state(OauthReply::failure("token expired"), &[]);
    let server = TestServer::new(token_app(state)).unwrap();

    let response = server
        .post("/login/token")
        .form(&[("usertoken", "stale")])
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("token expired"));
    assert!(body.contains("<svg"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_token_login_missing_carid_stores_empty() {
    let (state, store) = common::create_test_state(OauthReply::success(), &[]);
    let server = TestServer::new(token_app(state)).unwrap();

    let response = server
        .post("/login/token")
        .form(&[("usertoken", "tok-abc"), ("resptype", "json")])
        .await;

    response.assert_status_ok();

    let session_id = common::session_id_from_cookie(&response).unwrap();
    let session = store.get(&session_id).await.unwrap().unwrap();
    assert_eq!(session.carid, "");
}
