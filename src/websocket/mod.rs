//! WebSocket Dashboard Sessions
//!
//! Carries the same dispatch messages as `POST /api/v1/dispatch` over one
//! persistent connection per browser tab.
//!
//! ## Architecture
//!
//! - **Handler**: Handles WebSocket upgrade and message processing
//! - **Messages**: Defines client and server message formats
//!
//! Sessions share nothing but the dispatcher; every message carries the
//! complete inputs of the tab that sent it.
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({
//!     type: 'input_changed',
//!     trigger: 'meas-vs-year.relayoutData',
//!     inputs: {zoom: {'xaxis.range[0]': 1990, 'xaxis.range[1]': 2000}},
//!   }));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'charts') msg.charts.forEach(drawChart);
//! };
//! ```

mod handler;
mod messages;

pub use handler::websocket_handler;
pub use messages::{ClientMessage, ServerMessage};
