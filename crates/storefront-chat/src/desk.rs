//! The support desk — queueing, pairing, relay, and teardown.

use std::sync::Arc;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, info};

use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_entity::chat::WaiterInfo;

use crate::frames::ServerFrame;
use crate::handle::{ChannelHandle, ChannelId};

/// A visitor waiting to be claimed.
#[derive(Debug, Clone)]
struct Waiter {
    info: WaiterInfo,
    channel: Arc<ChannelHandle>,
}

/// An active conversation between one visitor and one operator.
#[derive(Debug, Clone)]
struct Pair {
    user: Arc<ChannelHandle>,
    operator: Arc<ChannelHandle>,
}

/// The chat queue and pairing engine.
///
/// Identities move `Unqueued → Waiting → Paired → (Ended)`. A claim removes
/// the waiter and creates the pair in one step; the map removal is atomic,
/// so two operators can never claim the same waiter. Operators are not
/// queued; they hold one pair per claimed identity.
#[derive(Debug, Default)]
pub struct SupportDesk {
    /// Identifier → waiting visitor.
    waiting: DashMap<String, Waiter>,
    /// Identifier → active pair.
    pairs: DashMap<String, Pair>,
    /// Connected operator channels.
    operators: DashMap<ChannelId, Arc<ChannelHandle>>,
}

impl SupportDesk {
    /// Create an empty desk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operator channel and show it the current queue.
    pub fn register_operator(&self, channel: Arc<ChannelHandle>) {
        channel.send(ServerFrame::QueueUpdate {
            waiting: self.queue_snapshot(),
        });
        info!(conn_id = %channel.id, email = %channel.email, "Operator connected");
        self.operators.insert(channel.id, channel);
    }

    /// Put a visitor into the waiting queue.
    ///
    /// Fails when the identity is already Waiting or already Paired: at most
    /// one live conversation per identifier.
    pub fn enqueue(&self, channel: Arc<ChannelHandle>) -> AppResult<()> {
        let email = channel.email.clone();

        match self.waiting.entry(email.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict(format!("{email} is already waiting")));
            }
            Entry::Vacant(slot) => {
                if self.pairs.contains_key(&email) {
                    return Err(AppError::conflict(format!("{email} is already in a chat")));
                }
                slot.insert(Waiter {
                    info: WaiterInfo {
                        email: email.clone(),
                        name: channel.name.clone(),
                        since: Utc::now(),
                    },
                    channel,
                });
            }
        }

        debug!(email = %email, "Visitor queued for support");
        self.broadcast_queue();
        Ok(())
    }

    /// Operator claims a waiter, creating the pair.
    ///
    /// The removal from the waiting set and the pair creation are one step;
    /// a second claim for the same identity finds nothing to remove and
    /// fails with NotWaiting.
    pub fn claim(&self, operator: &Arc<ChannelHandle>, email: &str) -> AppResult<()> {
        let (_, waiter) = self
            .waiting
            .remove(email)
            .ok_or_else(|| AppError::not_found(format!("{email} is not waiting")))?;

        let started = ServerFrame::ChatStarted {
            email: waiter.info.email.clone(),
            name: waiter.info.name.clone(),
        };
        waiter.channel.send(started.clone());
        operator.send(started);

        self.pairs.insert(
            waiter.info.email.clone(),
            Pair {
                user: waiter.channel,
                operator: Arc::clone(operator),
            },
        );

        info!(email = %email, operator = %operator.email, "Chat started");
        self.broadcast_queue();
        Ok(())
    }

    /// Relay a visitor message to their operator.
    pub fn relay_from_user(&self, email: &str, text: &str) -> AppResult<()> {
        let pair = self
            .pairs
            .get(email)
            .ok_or_else(|| AppError::not_found(format!("No active chat for {email}")))?;

        let delivered = pair.operator.send(ServerFrame::Message {
            email: email.to_string(),
            from: pair.user.name.clone(),
            text: text.to_string(),
        });

        if delivered {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "Operator channel for {email} is no longer open"
            )))
        }
    }

    /// Relay an operator message to the named visitor.
    pub fn relay_from_operator(&self, operator: &ChannelHandle, email: &str, text: &str) -> AppResult<()> {
        let pair = self
            .pairs
            .get(email)
            .ok_or_else(|| AppError::not_found(format!("No active chat for {email}")))?;

        let delivered = pair.user.send(ServerFrame::Message {
            email: email.to_string(),
            from: operator.name.clone(),
            text: text.to_string(),
        });

        if delivered {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "User channel for {email} is no longer open"
            )))
        }
    }

    /// Handle a visitor channel closing.
    ///
    /// Waiting → silently dequeued (operators see a queue update; nothing
    /// had started, so nobody is notified). Paired → the operator side gets
    /// `chatEnded` and the pair is destroyed.
    pub fn on_user_disconnect(&self, channel: &ChannelHandle) {
        channel.mark_closed();
        let email = &channel.email;

        let dequeued = self
            .waiting
            .remove_if(email, |_, waiter| waiter.channel.id == channel.id)
            .is_some();
        if dequeued {
            debug!(email = %email, "Waiting visitor left the queue");
            self.broadcast_queue();
            return;
        }

        let ended = self
            .pairs
            .remove_if(email, |_, pair| pair.user.id == channel.id);
        if let Some((_, pair)) = ended {
            pair.operator.send(ServerFrame::ChatEnded {
                email: email.clone(),
                reason: "user disconnected".to_string(),
            });
            info!(email = %email, "Chat ended, user disconnected");
        }
    }

    /// Handle an operator channel closing.
    ///
    /// Every pair owned by that channel is destroyed and each paired user
    /// gets `chatEnded`. Waiters are unaffected and stay queued for
    /// another operator.
    pub fn on_operator_disconnect(&self, channel: &ChannelHandle) {
        channel.mark_closed();
        self.operators.remove(&channel.id);

        let orphaned: Vec<String> = self
            .pairs
            .iter()
            .filter(|entry| entry.operator.id == channel.id)
            .map(|entry| entry.key().clone())
            .collect();

        for email in orphaned {
            if let Some((_, pair)) = self
                .pairs
                .remove_if(&email, |_, pair| pair.operator.id == channel.id)
            {
                pair.user.send(ServerFrame::ChatEnded {
                    email: email.clone(),
                    reason: "operator disconnected".to_string(),
                });
                info!(email = %email, "Chat ended, operator disconnected");
            }
        }
    }

    /// The waiting list, earliest first.
    pub fn queue_snapshot(&self) -> Vec<WaiterInfo> {
        let mut waiting: Vec<WaiterInfo> = self
            .waiting
            .iter()
            .map(|entry| entry.info.clone())
            .collect();
        waiting.sort_by(|a, b| a.since.cmp(&b.since));
        waiting
    }

    /// Number of visitors currently waiting.
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Number of active pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Push the current waiting list to every operator channel, pruning
    /// the ones that are gone.
    fn broadcast_queue(&self) {
        let update = ServerFrame::QueueUpdate {
            waiting: self.queue_snapshot(),
        };
        self.operators
            .retain(|_, operator| operator.send(update.clone()) || operator.is_alive());
    }
}
