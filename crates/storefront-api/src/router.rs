//! Route definitions for the storefront HTTP API.
//!
//! Routes keep the original flat paths (`/stock`, `/order`, ...) so the
//! static front end works unchanged. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// The storefront routes sit behind the shutdown gate; admin and health
/// routes do not, so the window can be managed while it is open.
pub fn build_router(state: AppState) -> Router {
    let gated = storefront_routes().route_layer(axum_middleware::from_fn_with_state(
        state.clone(),
        middleware::shutdown::shutdown_gate,
    ));

    let cors = build_cors_layer(&state);
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .merge(gated)
        .merge(catalog_routes())
        .merge(admin_routes())
        .merge(health_routes())
        .route("/chat", get(handlers::chat::chat_upgrade))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Storefront endpoints rejected while the shutdown window is open.
fn storefront_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/order", post(handlers::order::place_order))
        .route("/schedule-pickup", post(handlers::order::schedule_pickup))
}

/// Catalog reads and ban checks stay reachable during a shutdown window.
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/stock", get(handlers::stock::get_stock))
        .route("/check-ban", post(handlers::auth::check_ban))
        .route("/users", get(handlers::auth::online_users))
}

/// Admin moderation endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/update-stock", post(handlers::admin::upsert_stock))
        .route("/update-stock", delete(handlers::admin::delete_stock))
        .route("/ban-email", post(handlers::admin::ban_email))
        .route("/shutdown-site", post(handlers::admin::shutdown_site))
        .route("/end-sessions", post(handlers::admin::end_sessions))
        .route("/end-sessions-20m", post(handlers::admin::end_idle_sessions))
        .route("/clear-carts", post(handlers::admin::clear_carts))
}

/// Health check endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
