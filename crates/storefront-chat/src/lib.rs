//! # storefront-chat
//!
//! The support chat engine: a waiting queue of visitors, operator claim,
//! bidirectional relay, and disconnect teardown. State per identity moves
//! `Unqueued → Waiting → Paired → (Ended)`; operators are never queued and
//! may hold many pairs at once, one per claimed identity.

pub mod desk;
pub mod frames;
pub mod handle;

pub use desk::SupportDesk;
pub use frames::{ClientFrame, ServerFrame};
pub use handle::{ChannelHandle, ChannelId};
