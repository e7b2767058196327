//! Integration tests for order placement.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_order_with_insufficient_stock_reports_and_keeps_stock() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/order",
            Some(json!({
                "email": "a@b.com",
                "name": "A",
                "items": [{"id": 2, "quantity": 5}]
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(
        response.body["not_in_stock"],
        json!(["Heating Pad (requested 5, available 3)"])
    );
    assert_eq!(app.stock_of(2).await, 3);
}

#[tokio::test]
async fn test_order_decrements_stock_and_totals() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/order",
            Some(json!({
                "email": "a@b.com",
                "name": "A",
                "items": [{"id": 1, "quantity": 2}]
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_price"], 9.98);
    assert_eq!(
        response.body["not_in_stock"],
        json!([])
    );
    assert_eq!(app.stock_of(1).await, 18);
}

#[tokio::test]
async fn test_order_unknown_item_diagnostic() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/order",
            Some(json!({
                "email": "a@b.com",
                "name": "A",
                "items": [{"id": 9, "quantity": 1}]
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["not_in_stock"], json!(["Item 9 not found"]));
}

#[tokio::test]
async fn test_order_mixed_lines_only_touches_fulfilled() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/order",
            Some(json!({
                "email": "a@b.com",
                "name": "A",
                "items": [
                    {"id": 1, "quantity": 3},
                    {"id": 2, "quantity": 4}
                ]
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["not_in_stock"],
        json!(["Heating Pad (requested 4, available 3)"])
    );
    assert_eq!(app.stock_of(1).await, 17);
    assert_eq!(app.stock_of(2).await, 3);
}

#[tokio::test]
async fn test_order_with_invalid_shape_is_400() {
    let app = helpers::TestApp::new().await;

    let missing_items = app
        .request(
            "POST",
            "/order",
            Some(json!({"email": "a@b.com", "name": "A"})),
        )
        .await;
    assert_eq!(missing_items.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_items.body["success"], false);

    let empty_items = app
        .request(
            "POST",
            "/order",
            Some(json!({"email": "a@b.com", "name": "A", "items": []})),
        )
        .await;
    assert_eq!(empty_items.status, StatusCode::BAD_REQUEST);

    let zero_quantity = app
        .request(
            "POST",
            "/order",
            Some(json!({
                "email": "a@b.com",
                "name": "A",
                "items": [{"id": 1, "quantity": 0}]
            })),
        )
        .await;
    assert_eq!(zero_quantity.status, StatusCode::BAD_REQUEST);

    // Nothing was decremented by any of the rejected requests.
    assert_eq!(app.stock_of(1).await, 20);
}

#[tokio::test]
async fn test_order_from_banned_email_is_403() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/ban-email", Some(json!({"email": "a@b.com"})))
        .await;

    let response = app
        .request(
            "POST",
            "/order",
            Some(json!({
                "email": "A@B.com",
                "name": "A",
                "items": [{"id": 1, "quantity": 1}]
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["success"], false);
    assert_eq!(app.stock_of(1).await, 20);
}

#[tokio::test]
async fn test_schedule_pickup_echoes_time() {
    let app = helpers::TestApp::new().await;

    let response = app
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

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["pickupTime"], "2026-08-06T14:30");
}

#[tokio::test]
async fn test_schedule_pickup_rejects_bad_time() {
    let app = helpers::TestApp::new().await;

    let missing = app
        .request(
            "POST",
            "/schedule-pickup",
            Some(json!({"email": "a@b.com", "name": "A"})),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let garbage = app
        .request(
            "POST",
            "/schedule-pickup",
            Some(json!({
                "email": "a@b.com",
                "name": "A",
                "pickupTime": "whenever"
            })),
        )
        .await;
    assert_eq!(garbage.status, StatusCode::BAD_REQUEST);
}
