//! Session/cart registry.

use chrono::{Duration, Utc};
use dashmap::DashMap;
use tracing::info;

use storefront_core::config::session::SessionConfig;
use storefront_entity::session::Session;
use storefront_entity::stock::OrderLine;
use storefront_entity::user::{normalize_email, OnlineUser, Role};

/// Registry of active sessions and their carts, keyed by normalized email.
///
/// Each instance owns its own map, so tests get a fresh registry per test.
/// A cart rides on its session: the same removal (expiry, logout-all, ban
/// cascade) always drops both together.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: DashMap<String, Session>,
    idle_timeout: Duration,
}

impl SessionRegistry {
    /// Create a registry with the configured idle timeout.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout: Duration::minutes(config.idle_timeout_minutes as i64),
        }
    }

    /// Upsert a session, stamping the activity timestamp to now.
    ///
    /// An existing session keeps the role it was given at login; a new
    /// display name replaces a missing one.
    pub fn touch(&self, email: &str, name: Option<&str>, role: Role) {
        let email = normalize_email(email);
        self.sessions
            .entry(email.clone())
            .and_modify(|session| {
                session.last_activity = Utc::now();
                if let Some(name) = name {
                    session.name = Some(name.to_string());
                }
            })
            .or_insert_with(|| Session::new(email, name.map(ToString::to_string), role));
    }

    /// Role of an existing session, if one is present.
    pub fn role_of(&self, email: &str) -> Option<Role> {
        self.sessions
            .get(&normalize_email(email))
            .map(|session| session.role)
    }

    /// Replace the pending cart for an identifier.
    pub fn set_cart(&self, email: &str, lines: Vec<OrderLine>) {
        if let Some(mut session) = self.sessions.get_mut(&normalize_email(email)) {
            session.cart = lines;
        }
    }

    /// Pending cart for an identifier.
    pub fn cart_of(&self, email: &str) -> Vec<OrderLine> {
        self.sessions
            .get(&normalize_email(email))
            .map(|session| session.cart.clone())
            .unwrap_or_default()
    }

    /// Clear one identifier's cart.
    pub fn clear_cart(&self, email: &str) {
        if let Some(mut session) = self.sessions.get_mut(&normalize_email(email)) {
            session.cart.clear();
        }
    }

    /// Clear every pending cart, leaving the sessions in place.
    pub fn clear_all_carts(&self) {
        for mut entry in self.sessions.iter_mut() {
            entry.cart.clear();
        }
    }

    /// Remove every session idle for at least `threshold`. Returns the
    /// number removed (each takes its cart with it).
    pub fn expire_idle(&self, threshold: Duration) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !session.is_idle(threshold, now));
        let removed = before - self.sessions.len();
        if removed > 0 {
            info!(removed, "Expired idle sessions");
        }
        removed
    }

    /// Drop every session and cart. Returns the number removed.
    pub fn clear_all(&self) -> usize {
        let removed = self.sessions.len();
        self.sessions.clear();
        if removed > 0 {
            info!(removed, "Ended all sessions");
        }
        removed
    }

    /// Remove one identifier's session (ban cascade). Returns whether one
    /// existed.
    pub fn remove(&self, email: &str) -> bool {
        self.sessions.remove(&normalize_email(email)).is_some()
    }

    /// Recently active users, most recent first.
    pub fn online_users(&self) -> Vec<OnlineUser> {
        let mut entries: Vec<(chrono::DateTime<Utc>, OnlineUser)> = self
            .sessions
            .iter()
            .map(|entry| {
                (
                    entry.last_activity,
                    OnlineUser {
                        name: entry.display_name().to_string(),
                        email: entry.email.clone(),
                    },
                )
            })
            .collect();
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        entries.into_iter().map(|(_, user)| user).collect()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the registry holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// The configured idle timeout.
    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    #[cfg(test)]
    fn backdate(&self, email: &str, by: Duration) {
        if let Some(mut session) = self.sessions.get_mut(&normalize_email(email)) {
            session.last_activity = Utc::now() - by;
        }
    }
}
