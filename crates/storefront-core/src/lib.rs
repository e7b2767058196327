//! # storefront-core
//!
//! Core crate for the Fernwood storefront. Contains the unified error
//! system, typed identifiers, and configuration schemas.
//!
//! This crate has **no** internal dependencies on other storefront crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
