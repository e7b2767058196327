//! # storefront-store
//!
//! The Stock Store and Ban List: an in-memory catalog mirrored to a single
//! JSON document (`{"items": [...], "bannedEmails": [...]}`), rewritten
//! wholesale after every mutation. The document lives behind the
//! [`backend::StoreBackend`] seam so production uses a file and tests use
//! memory.

pub mod backend;
pub mod shop;

pub use backend::{JsonFileBackend, MemoryBackend, StoreBackend};
pub use shop::ShopStore;
