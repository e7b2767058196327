//! Shared primitive types used across the storefront crates.

pub mod id;

pub use id::ItemId;
