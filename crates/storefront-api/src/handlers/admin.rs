//! Admin moderation handlers — catalog edits, bans, shutdown window,
//! session and cart clearing.

use axum::extract::State;
use axum::Json;

use storefront_core::types::ItemId;

use crate::dto::request::{BanRequest, DeleteStockRequest, ShutdownRequest, UpsertStockRequest};
use crate::dto::response::{EndedResponse, OkResponse};
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /update-stock — create (no id) or replace (with id) a catalog item.
pub async fn upsert_stock(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpsertStockRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    state
        .store
        .upsert(req.id.map(ItemId), &req.name, req.price, req.stock)
        .await?;
    Ok(Json(OkResponse::ok()))
}

/// DELETE /update-stock — remove a catalog item.
pub async fn delete_stock(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<DeleteStockRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.remove(ItemId(req.id)).await?;
    Ok(Json(OkResponse::ok()))
}

/// POST /ban-email — ban an identifier and cascade its session and cart.
pub async fn ban_email(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<BanRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    state.store.ban(&req.email).await?;
    // The ban always clears any live session/cart, even when the address
    // was already on the list.
    state.sessions.remove(&req.email);
    Ok(Json(OkResponse::ok()))
}

/// POST /shutdown-site — open the shutdown window for N seconds.
pub async fn shutdown_site(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ShutdownRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    state.shutdown.activate(req.seconds)?;
    Ok(Json(OkResponse::ok()))
}

/// POST /end-sessions — drop every session and cart.
pub async fn end_sessions(State(state): State<AppState>) -> Json<EndedResponse> {
    let ended = state.sessions.clear_all();
    Json(EndedResponse {
        success: true,
        ended,
    })
}

/// POST /end-sessions-20m — expire sessions idle past the threshold.
pub async fn end_idle_sessions(State(state): State<AppState>) -> Json<EndedResponse> {
    let ended = state.sessions.expire_idle(state.sessions.idle_timeout());
    Json(EndedResponse {
        success: true,
        ended,
    })
}

/// POST /clear-carts — empty every pending cart, keeping the sessions.
pub async fn clear_carts(State(state): State<AppState>) -> Json<OkResponse> {
    state.sessions.clear_all_carts();
    Json(OkResponse::ok())
}
