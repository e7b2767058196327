//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::stock::OrderLine;
use crate::user::Role;

/// An active user session.
///
/// Sessions are created on login or order submission and removed by
/// logout-all, idle expiry, or a ban of the identifier. The cart rides on
/// the session and never outlives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Normalized email naming the user.
    pub email: String,
    /// Display name, when one has been supplied.
    pub name: Option<String>,
    /// Role resolved at login.
    pub role: Role,
    /// Last activity timestamp.
    pub last_activity: DateTime<Utc>,
    /// Pending cart contents, set on order submission.
    pub cart: Vec<OrderLine>,
}

impl Session {
    /// Create a fresh session stamped now.
    pub fn new(email: String, name: Option<String>, role: Role) -> Self {
        Self {
            email,
            name,
            role,
            last_activity: Utc::now(),
            cart: Vec::new(),
        }
    }

    /// Check whether the session has been idle for at least `threshold`.
    pub fn is_idle(&self, threshold: Duration, now: DateTime<Utc>) -> bool {
        now - self.last_activity >= threshold
    }

    /// Display name with the email as fallback.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
