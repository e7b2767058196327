//! Wire frames for the realtime channel.
//!
//! Frames are JSON objects tagged by `type`, camelCased to match the
//! front-end: `startChat`, `message`, `chatStarted`, `chatEnded`,
//! `queueUpdate`.

use serde::{Deserialize, Serialize};

use storefront_entity::chat::WaiterInfo;

/// Frames sent by a client to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientFrame {
    /// Operator claims the named waiter and starts the chat.
    StartChat {
        /// Identifier of the waiter to claim.
        email: String,
    },
    /// A chat message.
    ///
    /// Visitors omit `email` (their pair is implied); operators address one
    /// of their pairs with it.
    Message {
        /// Message text.
        text: String,
        /// Target pair identity, required from operators.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
}

/// Frames sent by the server to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerFrame {
    /// A chat has started between a waiter and an operator.
    ChatStarted {
        /// Identity of the visitor side of the pair.
        email: String,
        /// Visitor display name.
        name: String,
    },
    /// The chat has ended (either side disconnected).
    ChatEnded {
        /// Identity of the visitor side of the pair.
        email: String,
        /// Why the chat ended.
        reason: String,
    },
    /// A relayed chat message.
    Message {
        /// Identity of the visitor side of the pair.
        email: String,
        /// Sender display name.
        from: String,
        /// Message text.
        text: String,
    },
    /// The waiting list changed; sent to operator channels only.
    QueueUpdate {
        /// Waiters, earliest first.
        waiting: Vec<WaiterInfo>,
    },
    /// The last inbound frame could not be processed.
    Error {
        /// Human-readable description.
        message: String,
    },
}
