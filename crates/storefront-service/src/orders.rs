//! Order placement and pickup scheduling.

use std::sync::Arc;

use chrono::NaiveDateTime;

use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_entity::stock::{OrderLine, OrderOutcome};
use storefront_entity::user::{normalize_email, Role};
use storefront_notify::NotificationGateway;
use storefront_store::ShopStore;

use crate::sessions::SessionRegistry;

/// Composes the stock store, session registry, and notification gateway
/// into the storefront's two customer flows.
pub struct OrderService {
    store: Arc<ShopStore>,
    sessions: Arc<SessionRegistry>,
    gateway: Arc<NotificationGateway>,
}

impl OrderService {
    /// Create the service over its collaborators.
    pub fn new(
        store: Arc<ShopStore>,
        sessions: Arc<SessionRegistry>,
        gateway: Arc<NotificationGateway>,
    ) -> Self {
        Self {
            store,
            sessions,
            gateway,
        }
    }

    /// Place an order.
    ///
    /// The cart is recorded on the session when the order arrives and
    /// cleared once the stock commit succeeds; confirmation mail is
    /// dispatched after the commit and cannot fail the order.
    pub async fn place_order(
        &self,
        email: &str,
        name: &str,
        lines: Vec<OrderLine>,
    ) -> AppResult<OrderOutcome> {
        let email = normalize_email(email);
        if self.store.is_banned(&email).await {
            return Err(AppError::forbidden(format!("{email} is banned")));
        }

        self.sessions.touch(&email, Some(name), Role::Shopper);
        self.sessions.set_cart(&email, lines.clone());

        let outcome = self.store.apply_order(&lines).await?;
        self.sessions.clear_cart(&email);

        self.gateway
            .dispatch_order(email, name.to_string(), outcome.clone());

        Ok(outcome)
    }

    /// Schedule a pickup, validating the requested time.
    ///
    /// Accepts RFC 3339 or the HTML `datetime-local` shape. Returns the
    /// time string exactly as the caller sent it.
    pub async fn schedule_pickup(
        &self,
        email: &str,
        name: &str,
        pickup_time: &str,
    ) -> AppResult<String> {
        let email = normalize_email(email);
        if self.store.is_banned(&email).await {
            return Err(AppError::forbidden(format!("{email} is banned")));
        }

        validate_pickup_time(pickup_time)?;

        self.sessions.touch(&email, Some(name), Role::Shopper);
        self.gateway
            .dispatch_pickup(email, name.to_string(), pickup_time.to_string());

        Ok(pickup_time.to_string())
    }
}

/// Accept RFC 3339 (`2026-08-06T14:30:00Z`) or `datetime-local`
/// (`2026-08-06T14:30`, optionally with seconds).
fn validate_pickup_time(raw: &str) -> AppResult<()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::validation("Pickup time is required"));
    }

    let parses = chrono::DateTime::parse_from_rfc3339(raw).is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").is_ok();

    if parses {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Invalid pickup time: '{raw}'"
        )))
    }
}
