//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Plain success acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    /// Always `true`.
    pub success: bool,
}

impl OkResponse {
    /// The canonical success body.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always `true`.
    pub success: bool,
    /// Normalized (lower-cased) email.
    pub email: String,
    /// Present and `true` when the login resolved to the operator role.
    #[serde(rename = "isAdmin", skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// Ban membership response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckBanResponse {
    /// Whether the email is banned.
    pub banned: bool,
}

/// Order submission response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Always `true`.
    pub success: bool,
    /// Diagnostics for the lines that could not be fulfilled.
    pub not_in_stock: Vec<String>,
    /// Sum of fulfilled subtotals.
    pub total_price: f64,
}

/// Pickup scheduling response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupResponse {
    /// Always `true`.
    pub success: bool,
    /// The accepted pickup time, echoed back.
    #[serde(rename = "pickupTime")]
    pub pickup_time: String,
}

/// Bulk session action response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndedResponse {
    /// Always `true`.
    pub success: bool,
    /// Number of sessions removed.
    pub ended: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string, `"ok"` when serving.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}
