//! Per-connection channel handle.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use uuid::Uuid;

use storefront_entity::user::Role;

use crate::frames::ServerFrame;

/// Unique connection identifier.
pub type ChannelId = Uuid;

/// A handle to one realtime connection.
///
/// Holds the sender half for pushing frames to the client plus the identity
/// the connection authenticated as. Sends are best-effort: a full or closed
/// buffer drops the frame and a closed buffer marks the handle dead.
#[derive(Debug)]
pub struct ChannelHandle {
    /// Unique connection id.
    pub id: ChannelId,
    /// Normalized email of the connected identity.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role the connection authenticated as.
    pub role: Role,
    /// Sender for outbound frames.
    sender: mpsc::Sender<ServerFrame>,
    /// Whether the connection is still open.
    alive: AtomicBool,
}

impl ChannelHandle {
    /// Create a handle over the given sender.
    pub fn new(email: String, name: String, role: Role, sender: mpsc::Sender<ServerFrame>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            role,
            sender,
            alive: AtomicBool::new(true),
        }
    }

    /// Push a frame to this connection. Returns whether it was accepted.
    pub fn send(&self, frame: ServerFrame) -> bool {
        if !self.is_alive() {
            return false;
        }
        match self.sender.try_send(frame) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(conn_id = %self.id, "Send buffer full, dropping frame");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_closed();
                false
            }
        }
    }

    /// Check whether the connection is still open.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Mark the connection closed.
    pub fn mark_closed(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
