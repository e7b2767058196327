//! Login, ban check, and online-user handlers.

use axum::extract::State;
use axum::Json;

use storefront_core::error::AppError;
use storefront_entity::user::{normalize_email, OnlineUser, Role};

use crate::dto::request::{CheckBanRequest, LoginRequest};
use crate::dto::response::{CheckBanResponse, LoginResponse};
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /login — resolve the role once and open a session.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = normalize_email(&req.email);

    if state.store.is_banned(&email).await {
        return Err(AppError::forbidden(format!("{email} is banned")).into());
    }

    let role = if state.config.auth.is_operator(&email) {
        Role::Operator
    } else {
        Role::Shopper
    };

    state.sessions.touch(&email, req.name.as_deref(), role);

    Ok(Json(LoginResponse {
        success: true,
        email,
        is_admin: role.is_operator().then_some(true),
    }))
}

/// POST /check-ban — ban membership for an email.
pub async fn check_ban(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CheckBanRequest>,
) -> Result<Json<CheckBanResponse>, ApiError> {
    Ok(Json(CheckBanResponse {
        banned: state.store.is_banned(&req.email).await,
    }))
}

/// GET /users — recently active users, most recent first.
pub async fn online_users(State(state): State<AppState>) -> Json<Vec<OnlineUser>> {
    Json(state.sessions.online_users())
}
