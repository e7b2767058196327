//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use storefront_chat::SupportDesk;
use storefront_core::config::AppConfig;
use storefront_service::{OrderService, SessionRegistry, ShutdownWindow};
use storefront_store::ShopStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Stock store and ban list.
    pub store: Arc<ShopStore>,
    /// Session/cart registry.
    pub sessions: Arc<SessionRegistry>,
    /// Order placement service.
    pub orders: Arc<OrderService>,
    /// Support chat engine.
    pub desk: Arc<SupportDesk>,
    /// Admin shutdown window.
    pub shutdown: Arc<ShutdownWindow>,
    /// Process start time, for health reporting.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Seconds since the state was built.
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}
