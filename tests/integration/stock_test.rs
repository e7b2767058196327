//! Integration tests for catalog reads and admin stock edits.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_get_stock_returns_catalog() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/stock", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Band-Aid");
    assert_eq!(items[0]["price"], 4.99);
    assert_eq!(items[1]["stock"], 3);
}

#[tokio::test]
async fn test_create_item_allocates_next_id() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/update-stock",
            Some(json!({"name": "Gauze Roll", "price": 3.75, "stock": 12})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let stock = app.request("GET", "/stock", None).await;
    let items = stock.body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["id"], 3);
    assert_eq!(items[2]["name"], "Gauze Roll");
}

#[tokio::test]
async fn test_update_by_id_round_trips() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/update-stock",
            Some(json!({"id": 1, "name": "Band-Aid XL", "price": 5.99, "stock": 8})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let stock = app.request("GET", "/stock", None).await;
    let items = stock.body.as_array().unwrap();
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["name"], "Band-Aid XL");
    assert_eq!(items[0]["price"], 5.99);
    assert_eq!(items[0]["stock"], 8);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/update-stock",
            Some(json!({"id": 42, "name": "Ghost", "price": 1.0, "stock": 1})),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);

    // Nothing was inserted under the unknown id.
    let stock = app.request("GET", "/stock", None).await;
    assert_eq!(stock.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_with_invalid_fields_is_400() {
    let app = helpers::TestApp::new().await;

    let missing_name = app
        .request(
            "POST",
            "/update-stock",
            Some(json!({"price": 1.0, "stock": 1})),
        )
        .await;
    assert_eq!(missing_name.status, StatusCode::BAD_REQUEST);

    let negative_price = app
        .request(
            "POST",
            "/update-stock",
            Some(json!({"name": "Thing", "price": -1.0, "stock": 1})),
        )
        .await;
    assert_eq!(negative_price.status, StatusCode::BAD_REQUEST);

    let negative_stock = app
        .request(
            "POST",
            "/update-stock",
            Some(json!({"name": "Thing", "price": 1.0, "stock": -2})),
        )
        .await;
    assert_eq!(negative_stock.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_item() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("DELETE", "/update-stock", Some(json!({"id": 1})))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let stock = app.request("GET", "/stock", None).await;
    let items = stock.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 2);
}

#[tokio::test]
async fn test_delete_unknown_id_is_404() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("DELETE", "/update-stock", Some(json!({"id": 42})))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_without_id_is_400() {
    let app = helpers::TestApp::new().await;

    let response = app.request("DELETE", "/update-stock", Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
