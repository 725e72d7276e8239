//! # socklink
//!
//! A resilient WebSocket client for application backends: one live
//! connection per client, callback-based delivery, automatic
//! reconnection after unsolicited closes, and guaranteed teardown when
//! the last client handle is dropped.
//!
//! Inbound text frames are decoded as JSON; frames that do not parse
//! are delivered to the application verbatim instead of raising an
//! error. Outbound sends are fire-and-forget and silently dropped
//! while the connection is not open.
//!
//! ## Example
//!
//! ```no_run
//! use socklink::{SocketClient, SocketOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SocketClient::new(
//!         "https://app.example.com",
//!         "/api/llm/stream",
//!         SocketOptions::default()
//!             .on_message(|msg| println!("received: {msg:?}"))
//!             .on_close(|| println!("connection closed")),
//!     )?;
//!
//!     client.connect().await?;
//!     client.send(&serde_json::json!({ "prompt": "hello" })).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoint;
pub mod http;
pub mod infrastructure;
pub mod messaging;
pub mod types;
pub mod websocket;

pub use client::{ConnectionState, SocketClient, SocketClientBuilder, SocketOptions};
pub use http::ApiClient;
pub use messaging::Incoming;
pub use types::{Result, SocketError};
