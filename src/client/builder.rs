use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, watch};
use url::Url;

use super::core::{ClientInner, SocketClient};
use super::{ClientState, ConnectionManager};
use crate::endpoint;
use crate::messaging::{CloseHandler, Dispatcher, ErrorHandler, Incoming, MessageHandler};
use crate::types::Result;
use crate::types::constants::DEFAULT_RECONNECT_DELAY_MS;

/// Configuration captured at client construction.
///
/// The flag fields are plain data; the callback slots are set through
/// the chaining methods.
#[derive(Clone)]
pub struct SocketOptions {
    /// Reconnect automatically after an unsolicited close
    pub reconnect: bool,
    /// Fixed wait before each automatic reconnect attempt
    pub reconnect_delay: Duration,

    pub(crate) on_message: Option<MessageHandler>,
    pub(crate) on_error: Option<ErrorHandler>,
    pub(crate) on_close: Option<CloseHandler>,
}

impl Default for SocketOptions {
    fn default() -> Self {
        Self {
            reconnect: true,
            reconnect_delay: Duration::from_millis(DEFAULT_RECONNECT_DELAY_MS),
            on_message: None,
            on_error: None,
            on_close: None,
        }
    }
}

impl SocketOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to reconnect automatically after an unsolicited close.
    pub fn reconnect(mut self, reconnect: bool) -> Self {
        self.reconnect = reconnect;
        self
    }

    /// Fixed wait before each automatic reconnect attempt.
    pub fn reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    /// Callback invoked for each inbound message (decoded JSON, or the
    /// raw frame text when decoding fails).
    pub fn on_message<F>(mut self, handler: F) -> Self
    where
        F: Fn(Incoming) + Send + Sync + 'static,
    {
        self.on_message = Some(Arc::new(handler));
        self
    }

    /// Callback invoked when the transport reports an error.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&crate::types::SocketError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(handler));
        self
    }

    /// Callback invoked when the transport closes.
    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(handler));
        self
    }
}

/// Builder for SocketClient that derives the wire address and wires
/// the initial state
pub struct SocketClientBuilder {
    wire_url: Url,
    options: SocketOptions,
}

impl SocketClientBuilder {
    /// Create a new builder, resolving the wire address from the
    /// application origin and the logical path.
    pub fn new(
        origin: impl AsRef<str>,
        path: impl AsRef<str>,
        options: SocketOptions,
    ) -> Result<Self> {
        let wire_url = endpoint::resolve_wire_url(origin.as_ref(), path.as_ref())?;
        Ok(Self { wire_url, options })
    }

    /// Build the client. No connection is attempted until `connect()`.
    pub fn build(self) -> SocketClient {
        let (status_tx, _) = watch::channel(false);

        let dispatcher = Dispatcher {
            on_message: self.options.on_message,
            on_error: self.options.on_error,
            on_close: self.options.on_close,
        };

        SocketClient {
            inner: Arc::new(ClientInner {
                wire_url: self.wire_url,
                reconnect: self.options.reconnect,
                reconnect_delay: self.options.reconnect_delay,
                dispatcher,
                connection: ConnectionManager::new(),
                status: status_tx,
                state: RwLock::new(ClientState::new()),
            }),
        }
    }
}
