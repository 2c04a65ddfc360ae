mod common;

use common::{Harness, envelope};
use envdesk_api::{LoginForm, Session, UserProfile};
use envdesk_common::{AuthState, MemoryAuthStore};
use serde_json::json;

#[tokio::test]
async fn test_login_stores_token_and_profile() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/login")
        .with_body(envelope(json!({
            "access_token": "jwt-abc",
            "token_type": "bearer",
            "user_id": 7,
            "username": "admin"
        })))
        .create_async()
        .await;

    let harness = Harness::new(&server.url());
    let session = Session::new(harness.api.clone());
    assert!(!session.is_authenticated());

    let profile = session.login(&LoginForm::new("admin", "pw")).await.unwrap();

    let expected = UserProfile { user_id: 7, username: "admin".into() };
    assert_eq!(profile, expected);
    assert!(session.is_authenticated());
    assert_eq!(harness.store.token().as_deref(), Some("jwt-abc"));
    assert_eq!(session.profile(), Some(expected));
}

#[tokio::test]
async fn test_failed_login_stores_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/login")
        .with_body(json!({"code": 400, "data": null, "msg": "用户名或密码错误"}).to_string())
        .create_async()
        .await;

    let harness = Harness::new(&server.url());
    let session = Session::new(harness.api.clone());

    let err = session.login(&LoginForm::new("admin", "bad")).await.unwrap_err();

    assert_eq!(err.message, "用户名或密码错误");
    assert!(!session.is_authenticated());
    assert!(harness.store.user_info().is_none());
    assert_eq!(harness.notices().len(), 1);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/logout")
        .match_header("authorization", "Bearer jwt-abc")
        .with_body(envelope(json!("")))
        .create_async()
        .await;

    let store = MemoryAuthStore::with_token("jwt-abc");
    store.set_user_info(r#"{"user_id":7,"username":"admin"}"#.to_string());
    let harness = Harness::with_store(&server.url(), store);
    let session = Session::new(harness.api.clone());

    session.logout().await.unwrap();

    assert!(!session.is_authenticated());
    assert!(session.profile().is_none());
}

#[tokio::test]
async fn test_logout_clears_session_even_when_call_fails() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/logout")
        .with_status(502)
        .create_async()
        .await;

    let harness = Harness::with_store(&server.url(), MemoryAuthStore::with_token("jwt-abc"));
    let session = Session::new(harness.api.clone());

    let err = session.logout().await.unwrap_err();

    assert_eq!(err.message, "request failed, status: 502");
    assert!(harness.store.token().is_none());
}
