use std::sync::Arc;
use std::time::Duration;

use futures::stream::StreamExt;
use serde::Serialize;
use tokio::sync::{RwLock, watch};
use tokio_tungstenite::tungstenite::Message;
use url::Url;

use super::builder::{SocketClientBuilder, SocketOptions};
use super::connection::{ConnectionManager, ConnectionState};
use super::state::ClientState;
use crate::messaging::Dispatcher;
use crate::types::{Result, SocketError};
use crate::websocket::WebSocketFactory;

/// A resilient client for one bidirectional streaming socket.
///
/// `SocketClient` owns a single live connection at a time, delivers
/// inbound messages to the configured callbacks, and recovers from
/// unsolicited disconnects by scheduling a reconnect attempt after the
/// configured delay. A user-initiated [`disconnect()`](Self::disconnect)
/// always wins over automatic reconnection.
///
/// Cloning is cheap; clones share the same connection. When the last
/// clone is dropped, the read task and any pending reconnect are torn
/// down with it.
///
/// # Example
///
/// ```no_run
/// use socklink::{SocketClient, SocketOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SocketClient::new(
///     "https://app.example.com",
///     "/api/llm/stream",
///     SocketOptions::default()
///         .on_message(|msg| println!("received: {msg:?}")),
/// )?;
///
/// client.connect().await?;
/// client.send(&serde_json::json!({ "prompt": "hello" })).await?;
/// // ...
/// client.disconnect().await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SocketClient {
    pub(crate) inner: Arc<ClientInner>,
}

/// Shared internals. Background tasks hold only `Weak` references to
/// this, so dropping the last client handle tears the machinery down.
pub(crate) struct ClientInner {
    pub(crate) wire_url: Url,
    pub(crate) reconnect: bool,
    pub(crate) reconnect_delay: Duration,
    pub(crate) dispatcher: Dispatcher,

    pub(crate) connection: ConnectionManager,
    pub(crate) status: watch::Sender<bool>,
    pub(crate) state: RwLock<ClientState>,
}

impl SocketClient {
    /// Creates a new client without connecting.
    ///
    /// The wire address is derived at construction: scheme `wss` iff
    /// `origin` is secure, host taken from the origin authority, and
    /// `path` appended. Call [`connect()`](Self::connect) to establish
    /// the connection.
    ///
    /// # Errors
    ///
    /// Returns [`SocketError::UrlParse`] or [`SocketError::Endpoint`]
    /// when the origin cannot be turned into a wire address.
    pub fn new(
        origin: impl AsRef<str>,
        path: impl AsRef<str>,
        options: SocketOptions,
    ) -> Result<Self> {
        SocketClientBuilder::new(origin, path, options).map(|builder| builder.build())
    }

    /// Establishes the socket connection.
    ///
    /// Idempotent: calling while already connected (or while a connect
    /// is in flight) returns immediately without side effect. On
    /// success the status observable flips to `true` and the read task
    /// starts delivering inbound frames to the callbacks.
    ///
    /// A handshake failure surfaces through `on_error`, drives the
    /// close transition (which schedules an automatic retry when
    /// reconnection is enabled), and is also returned to the caller.
    pub async fn connect(&self) -> Result<()> {
        {
            let state = self.inner.connection.state().await;
            if state == ConnectionState::Open || state == ConnectionState::Connecting {
                return Ok(());
            }
        }
        self.inner.connection.set_state(ConnectionState::Connecting).await;
        {
            let mut state = self.inner.state.write().await;
            state.was_manual_disconnect = false;
            // this call chain IS the pending attempt, if one was armed
            state.reconnect.cancel();
        }

        tracing::info!(url = %self.inner.wire_url, "connecting");

        let ws_stream = match WebSocketFactory::create(self.inner.wire_url.as_str()).await {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!(error = %e, "websocket handshake failed");
                self.inner.dispatcher.dispatch_error(&e);
                ClientInner::transport_closed(&self.inner).await;
                return Err(e);
            }
        };

        // A disconnect() racing the handshake wins: discard the fresh
        // socket and never transition to Open.
        if self.inner.state.read().await.was_manual_disconnect {
            tracing::debug!("disconnect raced the handshake, discarding socket");
            return Ok(());
        }

        let (write_half, mut read_half) = ws_stream.split();
        self.inner.connection.set_writer(write_half).await;

        let weak = Arc::downgrade(&self.inner);
        {
            let mut state = self.inner.state.write().await;
            state.tasks.spawn(async move {
                while let Some(frame) = read_half.next().await {
                    let Some(inner) = weak.upgrade() else { break };
                    match frame {
                        Ok(Message::Text(text)) => {
                            tracing::debug!(len = text.len(), "received text frame");
                            inner.dispatcher.dispatch_text(text.as_str());
                        }
                        Ok(Message::Close(frame)) => {
                            match frame {
                                Some(f) => tracing::info!(
                                    code = ?f.code,
                                    reason = %f.reason,
                                    "server closed connection"
                                ),
                                None => tracing::info!("server closed connection"),
                            }
                            ClientInner::transport_closed(&inner).await;
                            break;
                        }
                        Ok(Message::Binary(data)) => {
                            tracing::warn!(len = data.len(), "ignoring unexpected binary frame");
                        }
                        Ok(Message::Ping(_)) | Ok(Message::Pong(_)) | Ok(Message::Frame(_)) => {}
                        Err(e) => {
                            let error = SocketError::WebSocket(e);
                            tracing::error!(error = %error, "websocket read error");
                            inner.dispatcher.dispatch_error(&error);
                            ClientInner::transport_closed(&inner).await;
                            break;
                        }
                    }
                }
                tracing::debug!("read task finished");
            });
        }

        self.inner.connection.set_state(ConnectionState::Open).await;
        self.inner.status.send_replace(true);
        tracing::info!("connected");
        Ok(())
    }

    /// Disconnects and suppresses any further automatic action.
    ///
    /// Cancels a pending reconnect first, then closes the transport and
    /// drops the connection. Safe to call repeatedly and when no
    /// connection exists; no reconnect is ever scheduled afterwards,
    /// regardless of the reconnect flag.
    pub async fn disconnect(&self) {
        tracing::info!("disconnecting");
        {
            let mut state = self.inner.state.write().await;
            state.was_manual_disconnect = true;
            state.reconnect.cancel();
            state.tasks.abort_all();
        }
        self.inner.connection.close().await;
        self.inner.status.send_replace(false);
    }

    /// Serializes `payload` to a JSON text frame and transmits it.
    ///
    /// Fire-and-forget: when the connection is not open the frame is
    /// silently dropped, by design, with no queueing and no error.
    /// Callers that care about delivery consult
    /// [`is_connected()`](Self::is_connected) first. The only error
    /// surface is payload serialization.
    pub async fn send<T: Serialize>(&self, payload: &T) -> Result<()> {
        let text = serde_json::to_string(payload)?;
        if !self.inner.connection.send_text(text).await {
            tracing::debug!("connection not open, outbound frame dropped");
        }
        Ok(())
    }

    /// Current connection status, readable at any time.
    pub fn is_connected(&self) -> bool {
        *self.inner.status.borrow()
    }

    /// Subscribes to connection status changes.
    ///
    /// The receiver always sees the latest status: `true` on open,
    /// `false` on close or disconnect.
    pub fn watch_status(&self) -> watch::Receiver<bool> {
        self.inner.status.subscribe()
    }
}

impl ClientInner {
    /// Drives the unsolicited-close transition: status drops, the close
    /// callback fires, then a single reconnect attempt is scheduled
    /// when reconnection is enabled and the close was not caused by
    /// `disconnect()`.
    ///
    /// Returns an explicitly `Send`-bounded future rather than being an
    /// `async fn`: the reconnect task it arms calls `connect()`, which
    /// awaits this method in turn (connect -> transport_closed -> arm ->
    /// connect). Stating `+ Send` here breaks that cyclic auto-trait
    /// inference — the compiler can rely on the declared bound instead of
    /// fetching an opaque hidden type from within its own defining scope.
    pub(crate) fn transport_closed(
        inner: &Arc<ClientInner>,
    ) -> impl std::future::Future<Output = ()> + Send + '_ {
        async move {
            inner.connection.clear_writer().await;
            inner.connection.set_state(ConnectionState::Closed).await;
            inner.status.send_replace(false);
            inner.dispatcher.dispatch_close();

            let mut state = inner.state.write().await;
            if state.was_manual_disconnect || !inner.reconnect {
                return;
            }

            let delay = inner.reconnect_delay;
            tracing::info!(delay_ms = delay.as_millis() as u64, "scheduling reconnect");

            let weak = Arc::downgrade(inner);
            state.reconnect.arm(delay, async move {
                let Some(inner) = weak.upgrade() else { return };
                // this schedule has fired; forget the handle so connect()
                // can arm a fresh one without aborting the running task
                inner.state.write().await.reconnect.forget();

                let client = SocketClient { inner };
                if let Err(e) = client.connect().await {
                    tracing::warn!(error = %e, "reconnect attempt failed");
                }
            });
        }
    }
}
