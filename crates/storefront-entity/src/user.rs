//! User role and online-user models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::AppError;

/// Roles a session can carry.
///
/// The role is resolved exactly once at login, from the configured operator
/// address list, and travels with the session from then on. Call sites check
/// the role, never the raw address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular storefront visitor.
    Shopper,
    /// A support/admin operator.
    Operator,
}

impl Role {
    /// Check if this role is the operator role.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shopper => "shopper",
            Self::Operator => "operator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shopper" => Ok(Self::Shopper),
            "operator" => Ok(Self::Operator),
            _ => Err(AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: shopper, operator"
            ))),
        }
    }
}

/// Normalize an email identifier: trimmed and lower-cased.
///
/// Every registry in the service keys on the normalized form, so bans,
/// sessions, carts, and chat state all agree on what names a user.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A recently active user as reported by `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineUser {
    /// Display name.
    pub name: String,
    /// Normalized email.
    pub email: String,
}
