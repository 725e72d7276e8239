use thiserror::Error;

/// Errors that can occur when using the socket client.
#[derive(Error, Debug)]
pub enum SocketError {
    /// WebSocket protocol error (handshake failed, invalid frame, broken transport)
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// The wire address could not be derived from the configured origin
    #[error("Endpoint error: {0}")]
    Endpoint(String),

    /// URL parsing error (malformed origin or path)
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// JSON serialization error on an outbound payload
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error (request helper)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status, carrying the server's detail message when present
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Convenience type alias for `Result<T, SocketError>`.
pub type Result<T> = std::result::Result<T, SocketError>;
