//! Request handlers, grouped by domain.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod health;
pub mod order;
pub mod stock;
