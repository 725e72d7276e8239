/// Default reconnect delay (milliseconds)
pub const DEFAULT_RECONNECT_DELAY_MS: u64 = 3000;

/// Wire schemes, selected from the origin's own scheme
pub const SCHEME_WS: &str = "ws";
pub const SCHEME_WSS: &str = "wss";

/// Content type used by the HTTP request helper
pub const CONTENT_TYPE_JSON: &str = "application/json";
