//! # storefront-entity
//!
//! Serializable domain models shared across the storefront crates:
//! catalog items and order outcomes, sessions and carts, user roles,
//! and chat queue entries.

pub mod chat;
pub mod session;
pub mod stock;
pub mod user;
