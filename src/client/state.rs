use crate::infrastructure::{ReconnectTimer, TaskManager};

/// Consolidated mutable state for SocketClient
/// Using a single struct keeps lifecycle transitions serialized
pub(crate) struct ClientState {
    /// Background read task for the current connection
    pub tasks: TaskManager,

    /// Pending automatic reconnect, if armed
    pub reconnect: ReconnectTimer,

    /// Whether the last disconnect was user-initiated (suppresses auto-reconnect)
    pub was_manual_disconnect: bool,
}

impl ClientState {
    pub fn new() -> Self {
        Self {
            tasks: TaskManager::new(),
            reconnect: ReconnectTimer::new(),
            was_manual_disconnect: false,
        }
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}
