//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between
//! the dashboard page and the server.

use serde::{Deserialize, Serialize};

use crate::dashboard::{ChartUpdate, Dispatcher, Input, PartialInputs};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A control or chart event changed
    InputChanged {
        /// Id of the changed input (e.g., "bubble-x")
        trigger: String,
        #[serde(default)]
        inputs: PartialInputs,
    },
    /// Build every chart, e.g. after a reconnect
    Render {
        #[serde(default)]
        inputs: PartialInputs,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// Replacement figures
    Charts { charts: Vec<ChartUpdate> },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl ClientMessage {
    /// Answer a client message
    pub fn respond(self, dispatcher: &Dispatcher) -> ServerMessage {
        match self {
            ClientMessage::InputChanged { trigger, inputs } => match trigger.parse::<Input>() {
                Ok(input) => ServerMessage::Charts {
                    charts: dispatcher.dispatch(input, &dispatcher.inputs_from(inputs)),
                },
                Err(e) => ServerMessage::Error {
                    message: e.to_string(),
                },
            },
            ClientMessage::Render { inputs } => {
                let inputs = dispatcher.inputs_from(inputs);
                ServerMessage::Charts {
                    charts: dispatcher.render_all(&inputs),
                }
            }
            ClientMessage::Ping => ServerMessage::Pong,
        }
    }
}
