//! Integration tests for login, sessions, and bulk clearing.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_lowercases_email_and_opens_session() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({"email": "Shopper@Example.Com", "name": "Sam"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["email"], "shopper@example.com");
    assert!(response.body.get("isAdmin").is_none());

    let users = app.request("GET", "/users", None).await;
    let list = users.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Sam");
    assert_eq!(list[0]["email"], "shopper@example.com");
}

#[tokio::test]
async fn test_login_without_email_is_400() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/login", Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_operator_login_reports_is_admin() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({"email": helpers::OPERATOR_EMAIL, "name": "Desk"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isAdmin"], true);
}

#[tokio::test]
async fn test_order_touches_session_for_users_listing() {
    let app = helpers::TestApp::new().await;

    app.request(
        "POST",
        "/order",
        Some(json!({
            "email": "a@b.com",
            "name": "A",
            "items": [{"id": 1, "quantity": 1}]
        })),
    )
    .await;

    let users = app.request("GET", "/users", None).await;
    let list = users.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["email"], "a@b.com");
}

#[tokio::test]
async fn test_end_sessions_clears_everything() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/login", Some(json!({"email": "a@b.com"})))
        .await;
    app.request("POST", "/login", Some(json!({"email": "c@d.com"})))
        .await;

    let response = app.request("POST", "/end-sessions", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["ended"], 2);

    let users = app.request("GET", "/users", None).await;
    assert_eq!(users.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_end_idle_sessions_spares_fresh_ones() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/login", Some(json!({"email": "a@b.com"})))
        .await;

    let response = app.request("POST", "/end-sessions-20m", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ended"], 0);
    assert_eq!(app.sessions.len(), 1);
}

#[tokio::test]
async fn test_clear_carts_keeps_sessions() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/login", Some(json!({"email": "a@b.com"})))
        .await;

    let response = app.request("POST", "/clear-carts", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(app.sessions.len(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body.get("version").is_some());
}
