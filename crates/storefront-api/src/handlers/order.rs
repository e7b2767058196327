//! Order and pickup handlers.

use axum::extract::State;
use axum::Json;

use storefront_core::types::ItemId;
use storefront_entity::stock::OrderLine;

use crate::dto::request::{OrderRequest, PickupRequest};
use crate::dto::response::{OrderResponse, PickupResponse};
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /order — place an order against the catalog.
pub async fn place_order(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<OrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let lines: Vec<OrderLine> = req
        .items
        .iter()
        .map(|line| OrderLine {
            id: ItemId(line.id),
            quantity: line.quantity,
        })
        .collect();

    let outcome = state.orders.place_order(&req.email, &req.name, lines).await?;

    Ok(Json(OrderResponse {
        success: true,
        not_in_stock: outcome.not_in_stock(),
        total_price: outcome.total_price,
    }))
}

/// POST /schedule-pickup — validate and confirm a pickup time.
pub async fn schedule_pickup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PickupRequest>,
) -> Result<Json<PickupResponse>, ApiError> {
    let pickup_time = state
        .orders
        .schedule_pickup(&req.email, &req.name, &req.pickup_time)
        .await?;

    Ok(Json(PickupResponse {
        success: true,
        pickup_time,
    }))
}
