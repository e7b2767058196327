//! The `/chat` WebSocket bridge into the support desk.

use std::sync::Arc;

use axum::extract::ws::{CloseFrame, Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use storefront_chat::{ChannelHandle, ClientFrame, ServerFrame};
use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_entity::user::{normalize_email, Role};

use crate::state::AppState;

/// WebSocket close code for policy violations (missing identity, ban).
const POLICY_VIOLATION: u16 = 1008;

/// Query parameters for the chat channel.
#[derive(Debug, serde::Deserialize)]
pub struct ChatQuery {
    /// Email identifying the connection.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the client asks for the operator view.
    #[serde(default, rename = "isAdmin")]
    pub is_admin: Option<bool>,
}

/// GET /chat?email=&name=&isAdmin= — WebSocket upgrade.
pub async fn chat_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<ChatQuery>,
) -> Response {
    ws.on_upgrade(move |socket| handle_chat(state, query, socket))
}

/// Drives one established chat connection to completion.
async fn handle_chat(state: AppState, query: ChatQuery, mut socket: WebSocket) {
    let email = query.email.as_deref().map(str::trim).unwrap_or_default();
    let name = query.name.as_deref().map(str::trim).unwrap_or_default();

    if email.is_empty() || name.is_empty() {
        close_with_policy(&mut socket, "email and name are required").await;
        return;
    }

    let email = normalize_email(email);
    if state.store.is_banned(&email).await {
        close_with_policy(&mut socket, "this address is banned").await;
        return;
    }

    // The isAdmin flag only asks for the operator view; the address still
    // has to be on the configured operator list to get it.
    let role = if query.is_admin.unwrap_or(false) && state.config.auth.is_operator(&email) {
        Role::Operator
    } else {
        Role::Shopper
    };

    let (mut ws_tx, mut ws_rx) = socket.split();
    let (tx, mut outbound_rx) = mpsc::channel(state.config.chat.channel_buffer_size);
    let handle = Arc::new(ChannelHandle::new(
        email.clone(),
        name.to_string(),
        role,
        tx,
    ));

    state.sessions.touch(&email, Some(name), role);

    // Outbound forwarder: frames pushed by the desk go out the socket.
    let outbound_task = tokio::spawn(async move {
        while let Some(frame) = outbound_rx.recv().await {
            let Ok(text) = serde_json::to_string(&frame) else {
                continue;
            };
            if ws_tx.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    match role {
        Role::Operator => state.desk.register_operator(Arc::clone(&handle)),
        Role::Shopper => {
            // A second connection for an identity already waiting or paired
            // is told so but left open; it holds no queue slot.
            if let Err(e) = state.desk.enqueue(Arc::clone(&handle)) {
                handle.send(ServerFrame::Error { message: e.message });
            }
        }
    }

    info!(conn_id = %handle.id, email = %email, role = %role, "Chat connection established");

    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Text(text)) => {
                if let Err(e) = dispatch_frame(&state, &handle, text.as_str()) {
                    handle.send(ServerFrame::Error { message: e.message });
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(conn_id = %handle.id, error = %e, "Chat socket error");
                break;
            }
        }
    }

    // Whatever ended the socket, the disconnect handler runs exactly once.
    match role {
        Role::Operator => state.desk.on_operator_disconnect(&handle),
        Role::Shopper => state.desk.on_user_disconnect(&handle),
    }
    outbound_task.abort();

    info!(conn_id = %handle.id, email = %email, "Chat connection closed");
}

/// Parse and route one inbound frame.
fn dispatch_frame(state: &AppState, handle: &Arc<ChannelHandle>, raw: &str) -> AppResult<()> {
    let frame: ClientFrame = serde_json::from_str(raw)
        .map_err(|e| AppError::validation(format!("Malformed frame: {e}")))?;

    match (handle.role, frame) {
        (Role::Operator, ClientFrame::StartChat { email }) => {
            state.desk.claim(handle, &normalize_email(&email))
        }
        (Role::Operator, ClientFrame::Message { text, email }) => {
            let target = email.ok_or_else(|| {
                AppError::validation("Operator messages must name the target email")
            })?;
            check_length(state, &text)?;
            state
                .desk
                .relay_from_operator(handle, &normalize_email(&target), &text)
        }
        (Role::Shopper, ClientFrame::Message { text, .. }) => {
            check_length(state, &text)?;
            state.desk.relay_from_user(&handle.email, &text)
        }
        (Role::Shopper, ClientFrame::StartChat { .. }) => Err(AppError::forbidden(
            "Only operators can start chats",
        )),
    }
}

fn check_length(state: &AppState, text: &str) -> AppResult<()> {
    let limit = state.config.chat.max_message_chars;
    if text.chars().count() > limit {
        return Err(AppError::validation(format!(
            "Message exceeds {limit} characters"
        )));
    }
    Ok(())
}

/// Close the socket with the policy-violation code before any state was
/// registered for it.
async fn close_with_policy(socket: &mut WebSocket, reason: &'static str) {
    let _ = socket
        .send(Message::Close(Some(CloseFrame {
            code: POLICY_VIOLATION,
            reason: reason.into(),
        })))
        .await;
}
