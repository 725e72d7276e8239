use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::types::Result;

/// Stream type produced by the factory.
pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket factory for creating transport connections
pub struct WebSocketFactory;

impl WebSocketFactory {
    /// Open a WebSocket connection, completing the handshake.
    pub async fn create(url: &str) -> Result<WsStream> {
        tracing::debug!(%url, "opening websocket");
        let (stream, response) = connect_async(url).await?;
        tracing::debug!(status = %response.status(), "websocket handshake completed");
        Ok(stream)
    }
}
