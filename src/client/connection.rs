use futures::sink::SinkExt;
use futures::stream::SplitSink;
use tokio::sync::RwLock;
use tokio_tungstenite::tungstenite::Message;

use crate::websocket::WsStream;

/// Lifecycle states of the owned transport connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Closed,
    Connecting,
    Open,
    Closing,
}

type WriteHalf = SplitSink<WsStream, Message>;

/// Owns the write half of the live connection and its state.
///
/// Exactly one live connection exists per client at any time. The read
/// half lives in the read task, which reports transport events back
/// through the client.
pub struct ConnectionManager {
    writer: RwLock<Option<WriteHalf>>,
    state: RwLock<ConnectionState>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            writer: RwLock::new(None),
            state: RwLock::new(ConnectionState::Closed),
        }
    }

    /// Gets the current connection state
    pub async fn state(&self) -> ConnectionState {
        *self.state.read().await
    }

    /// Sets the connection state
    pub async fn set_state(&self, new_state: ConnectionState) {
        *self.state.write().await = new_state;
    }

    /// Checks if the connection is currently open
    pub async fn is_open(&self) -> bool {
        *self.state.read().await == ConnectionState::Open
    }

    /// Installs the write half after a successful handshake
    pub async fn set_writer(&self, writer: WriteHalf) {
        let mut guard = self.writer.write().await;
        *guard = Some(writer);
    }

    /// Drops the write half without a close handshake
    pub async fn clear_writer(&self) {
        let mut guard = self.writer.write().await;
        *guard = None;
    }

    /// Transmits one already-encoded text frame.
    ///
    /// Returns `false` without error when the connection is not open:
    /// the frame is deliberately dropped, not queued.
    pub async fn send_text(&self, text: String) -> bool {
        if *self.state.read().await != ConnectionState::Open {
            return false;
        }

        let mut guard = self.writer.write().await;
        let Some(writer) = guard.as_mut() else {
            return false;
        };

        match writer.send(Message::Text(text.into())).await {
            Ok(()) => true,
            Err(e) => {
                // the read task observes the broken transport and drives
                // the close transition; this frame is dropped
                tracing::warn!(error = %e, "websocket write failed, frame dropped");
                false
            }
        }
    }

    /// Closes the transport. Idempotent when already closed or absent.
    pub async fn close(&self) {
        self.set_state(ConnectionState::Closing).await;

        let mut guard = self.writer.write().await;
        if let Some(writer) = guard.as_mut()
            && let Err(e) = writer.close().await
        {
            tracing::debug!(error = %e, "websocket close handshake failed");
        }
        *guard = None;
        drop(guard);

        self.set_state(ConnectionState::Closed).await;
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}
