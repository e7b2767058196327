//! Catalog read handler.

use axum::extract::State;
use axum::Json;

use storefront_entity::stock::StockItem;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /stock — the catalog as a plain array.
pub async fn get_stock(State(state): State<AppState>) -> Result<Json<Vec<StockItem>>, ApiError> {
    Ok(Json(state.store.items().await))
}
