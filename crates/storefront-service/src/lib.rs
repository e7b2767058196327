//! # storefront-service
//!
//! Service layer: the session/cart registry, the admin shutdown window,
//! and the order placement service that composes the stock store, the
//! registry, and the notification gateway.

pub mod orders;
pub mod sessions;
pub mod shutdown;

pub use orders::OrderService;
pub use sessions::SessionRegistry;
pub use shutdown::ShutdownWindow;
