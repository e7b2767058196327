//! # storefront-api
//!
//! The HTTP/realtime boundary: Axum router, request handlers, DTOs,
//! middleware, and the `/chat` WebSocket bridge into the support desk.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
