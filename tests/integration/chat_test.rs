//! Integration tests for the chat channel boundary.
//!
//! Queue and pairing behavior is covered by the engine's unit tests; these
//! exercise the HTTP side of the upgrade.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_chat_without_upgrade_headers_is_rejected() {
    let app = helpers::TestApp::new().await;

    // A plain GET is not a WebSocket handshake.
    let response = app
        .request("GET", "/chat?email=a@b.com&name=A", None)
        .await;

    assert!(
        response.status == StatusCode::UPGRADE_REQUIRED
            || response.status == StatusCode::BAD_REQUEST,
        "Expected 426 or 400, got {}",
        response.status
    );
}

#[tokio::test]
async fn test_chat_route_exists() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/chat", None).await;
    assert_ne!(response.status, StatusCode::NOT_FOUND);
}
