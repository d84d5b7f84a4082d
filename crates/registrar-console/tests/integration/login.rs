//! Login, logout, and the session gate in front of the dashboard.

use registrar_auth::{Guard, Role, SessionContext};
use registrar_console::{Dashboard, Error, LoginError, login, logout};
use serde_json::json;

use crate::common::{ScriptedClient, Verb, api, unreachable_api};

#[tokio::test]
async fn test_role_is_lowercased_and_routed() {
    let client = ScriptedClient::new();
    client.reply(Verb::Post, "login", json!({"success": true, "token": "t-1"}));
    let session = SessionContext::in_memory();

    let role = login(client.as_ref(), &session, "root", "pw", "Admin")
        .await
        .unwrap();

    assert_eq!(role, Role::Admin);
    assert_eq!(role.landing_route(), "/admin-dashboard");
    let sent = client.calls_to(Verb::Post, "login");
    assert_eq!(
        sent[0].body,
        Some(json!({"username": "root", "password": "pw", "role": "admin"}))
    );
    assert_eq!(session.token().as_deref(), Some("t-1"));
    assert_eq!(session.role().as_deref(), Some("admin"));
}

#[tokio::test]
async fn test_empty_fields_make_no_request() {
    let client = ScriptedClient::new();
    let session = SessionContext::in_memory();

    let err = login(client.as_ref(), &session, "", "pw", "registrar")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Please enter username, password, and select role"
    );
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_rejected_credentials() {
    let client = ScriptedClient::new();
    client.fail(Verb::Post, "login", 401, Some("Invalid credentials"));
    let session = SessionContext::in_memory();

    let err = login(client.as_ref(), &session, "root", "bad", "registrar")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(session.current().is_none());
}

#[tokio::test]
async fn test_success_without_token_fails() {
    let client = ScriptedClient::new();
    client.reply(Verb::Post, "login", json!({"success": true}));
    let session = SessionContext::in_memory();

    let err = login(client.as_ref(), &session, "root", "pw", "registrar")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Login failed");
    assert!(session.current().is_none());
}

#[tokio::test]
async fn test_unreachable_server() {
    let session = SessionContext::in_memory();

    let err = login(unreachable_api().as_ref(), &session, "root", "pw", "registrar")
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Unreachable));
    assert_eq!(err.to_string(), "Server not reachable");
}

#[tokio::test]
async fn test_gate_follows_login_and_logout() {
    let client = ScriptedClient::new();
    client.reply(Verb::Post, "login", json!({"success": true, "token": "t-2"}));
    let session = SessionContext::in_memory();
    let guard = Guard::new(&["registrar"]);

    let denied = Dashboard::open(api(&client), &guard, &session).unwrap_err();
    assert!(matches!(denied, Error::Redirect { route: "/login" }));

    login(client.as_ref(), &session, "reg", "pw", "Registrar")
        .await
        .unwrap();
    assert!(Dashboard::open(api(&client), &guard, &session).is_ok());

    assert_eq!(logout(&session).unwrap(), "/login");
    assert!(Dashboard::open(api(&client), &guard, &session).is_err());
}

#[tokio::test]
async fn test_wrong_role_is_turned_away() {
    let client = ScriptedClient::new();
    client.reply(Verb::Post, "login", json!({"success": true, "token": "t-3"}));
    let session = SessionContext::in_memory();

    login(client.as_ref(), &session, "prof", "pw", "faculty")
        .await
        .unwrap();

    let guard = Guard::new(&["registrar"]);
    assert!(matches!(
        Dashboard::open(api(&client), &guard, &session),
        Err(Error::Redirect { .. })
    ));
}

#[tokio::test]
async fn test_undecodable_success_body_fails() {
    let client = ScriptedClient::new();
    client.reply(Verb::Post, "login", json!({"success": "yes", "token": 42}));
    let session = SessionContext::in_memory();

    let err = login(client.as_ref(), &session, "root", "pw", "registrar")
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Rejected(None)));
    assert_eq!(err.to_string(), "Login failed");
    assert!(session.current().is_none());
}
