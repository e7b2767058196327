//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email identifying the user.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Ban membership check body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckBanRequest {
    /// Email to check.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// One requested order line.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderLineRequest {
    /// Item id. Always ≥ 1.
    #[validate(range(min = 1, message = "Item id must be positive"))]
    pub id: u32,
    /// Units requested. Always ≥ 1.
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

/// Order submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderRequest {
    /// Email identifying the customer.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Customer display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Requested lines.
    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<OrderLineRequest>,
}

/// Pickup scheduling body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PickupRequest {
    /// Email identifying the customer.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Customer display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Requested pickup time.
    #[serde(rename = "pickupTime")]
    #[validate(length(min = 1, message = "Pickup time is required"))]
    pub pickup_time: String,
}

/// Catalog upsert body. Without an id a new item is appended; with one the
/// existing item is replaced (unknown ids are 404, never inserted).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertStockRequest {
    /// Target item id, absent for creation.
    #[serde(default)]
    #[validate(range(min = 1, message = "Item id must be positive"))]
    pub id: Option<u32>,
    /// Item name.
    #[validate(length(min = 1, message = "Item name is required"))]
    pub name: String,
    /// Unit price.
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    /// Units available.
    pub stock: u32,
}

/// Catalog delete body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteStockRequest {
    /// Id of the item to delete.
    #[validate(range(min = 1, message = "Item id must be positive"))]
    pub id: u32,
}

/// Ban request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BanRequest {
    /// Email to ban.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Shutdown window request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShutdownRequest {
    /// Window length in seconds. Must be positive.
    pub seconds: i64,
}
