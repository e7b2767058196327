//! Integration tests for bans and the shutdown window.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_ban_is_case_insensitive() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/ban-email", Some(json!({"email": "x@y.com"})))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let check = app
        .request("POST", "/check-ban", Some(json!({"email": "X@Y.com"})))
        .await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(check.body["banned"], true);

    let other = app
        .request("POST", "/check-ban", Some(json!({"email": "z@y.com"})))
        .await;
    assert_eq!(other.body["banned"], false);
}

#[tokio::test]
async fn test_ban_is_idempotent() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/ban-email", Some(json!({"email": "x@y.com"})))
        .await;
    let second = app
        .request("POST", "/ban-email", Some(json!({"email": "X@Y.COM"})))
        .await;
    assert_eq!(second.status, StatusCode::OK);

    assert_eq!(app.store.banned_emails().await, vec!["x@y.com"]);
}

#[tokio::test]
async fn test_ban_removes_session_and_blocks_login() {
    let app = helpers::TestApp::new().await;

    app.request(
        "POST",
        "/login",
        Some(json!({"email": "x@y.com", "name": "X"})),
    )
    .await;
    assert_eq!(app.sessions.len(), 1);

    app.request("POST", "/ban-email", Some(json!({"email": "X@y.com"})))
        .await;
    assert_eq!(app.sessions.len(), 0);

    let login = app
        .request("POST", "/login", Some(json!({"email": "x@y.com"})))
        .await;
    assert_eq!(login.status, StatusCode::FORBIDDEN);
    assert_eq!(login.body["success"], false);
}

#[tokio::test]
async fn test_ban_without_email_is_400() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/ban-email", Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shutdown_rejects_bad_duration() {
    let app = helpers::TestApp::new().await;

    let zero = app
        .request("POST", "/shutdown-site", Some(json!({"seconds": 0})))
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);

    let negative = app
        .request("POST", "/shutdown-site", Some(json!({"seconds": -5})))
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    assert!(!app.shutdown.is_active());
}

#[tokio::test]
async fn test_shutdown_window_gates_storefront_routes() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/shutdown-site", Some(json!({"seconds": 60})))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let order = app
        .request(
            "POST",
            "/order",
            Some(json!({
                "email": "a@b.com",
                "name": "A",
                "items": [{"id": 1, "quantity": 1}]
            })),
        )
        .await;
    assert_eq!(order.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(order.body["success"], false);

    let login = app
        .request("POST", "/login", Some(json!({"email": "a@b.com"})))
        .await;
    assert_eq!(login.status, StatusCode::SERVICE_UNAVAILABLE);

    let pickup = app
        .request(
            "POST",
            "/schedule-pickup",
            Some(json!({
                "email": "a@b.com",
                "name": "A",
                "pickupTime": "2026-08-06T14:30"
            })),
        )
        .await;
    assert_eq!(pickup.status, StatusCode::SERVICE_UNAVAILABLE);

    // Stock stayed untouched behind the gate.
    assert_eq!(app.stock_of(1).await, 20);
}

#[tokio::test]
async fn test_admin_routes_stay_open_during_shutdown() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/shutdown-site", Some(json!({"seconds": 60})))
        .await;

    let stock = app.request("GET", "/stock", None).await;
    assert_eq!(stock.status, StatusCode::OK);

    let update = app
        .request(
            "POST",
            "/update-stock",
            Some(json!({"id": 1, "name": "Band-Aid", "price": 4.99, "stock": 25})),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);

    let health = app.request("GET", "/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
}
