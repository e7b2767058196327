//! Shutdown window gate.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use storefront_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects gated storefront routes with 503 while the admin shutdown
/// window is open. Admin routes are mounted outside this layer so the
/// window stays manageable.
pub async fn shutdown_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.shutdown.is_active() {
        return ApiError(AppError::service_unavailable(
            "The shop is temporarily closed, please try again shortly",
        ))
        .into_response();
    }

    next.run(request).await
}
