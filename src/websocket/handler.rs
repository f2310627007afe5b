//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{Sink, SinkExt, StreamExt};
use std::sync::Arc;

use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::dashboard::Dispatcher;

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let dispatcher = Arc::clone(&state.dispatcher);
    ws.on_upgrade(move |socket| handle_socket(socket, dispatcher))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, dispatcher: Arc<Dispatcher>) {
    let (mut sender, mut receiver) = socket.split();
    let connection_id = uuid::Uuid::new_v4().to_string();

    tracing::debug!(connection_id = %connection_id, "WebSocket session opened");

    let connected = ServerMessage::Connected {
        connection_id: connection_id.clone(),
    };
    if send(&mut sender, &connected).await.is_err() {
        tracing::error!(connection_id = %connection_id, "Failed to send connected message");
        return;
    }

    while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    "WebSocket receive error"
                );
                break;
            }
        };

        let reply = match message {
            Message::Text(text) => Some(handle_text(&dispatcher, &connection_id, &text)),
            Message::Binary(_) => Some(ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            }),
            // Axum answers pings itself
            Message::Ping(_) | Message::Pong(_) => None,
            Message::Close(_) => {
                tracing::debug!(connection_id = %connection_id, "Client requested close");
                break;
            }
        };

        if let Some(reply) = reply {
            if send(&mut sender, &reply).await.is_err() {
                tracing::debug!(
                    connection_id = %connection_id,
                    "WebSocket send failed, closing connection"
                );
                break;
            }
        }
    }

    tracing::debug!(connection_id = %connection_id, "WebSocket session closed");
}

/// Parse and answer a text frame. Invalid frames get an error reply and
/// keep the connection open.
fn handle_text(dispatcher: &Dispatcher, connection_id: &str, text: &str) -> ServerMessage {
    match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message.respond(dispatcher),
        Err(e) => {
            tracing::debug!(
                connection_id = %connection_id,
                error = %e,
                text = %text,
                "Invalid client message"
            );
            ServerMessage::Error {
                message: format!("Invalid message format: {}", e),
            }
        }
    }
}

async fn send<S>(sender: &mut S, message: &ServerMessage) -> Result<(), axum::Error>
where
    S: Sink<Message, Error = axum::Error> + Unpin,
{
    match serde_json::to_string(message) {
        Ok(text) => sender.send(Message::Text(text)).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize message");
            Ok(())
        }
    }
}
