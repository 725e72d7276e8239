use std::sync::Arc;

use super::payload::Incoming;
use crate::types::SocketError;

/// Application callback invoked for each inbound message.
pub type MessageHandler = Arc<dyn Fn(Incoming) + Send + Sync + 'static>;

/// Application callback invoked when the transport reports an error.
pub type ErrorHandler = Arc<dyn Fn(&SocketError) + Send + Sync + 'static>;

/// Application callback invoked when the transport closes.
pub type CloseHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// Flat callback table wired at construction; every slot is optional.
///
/// Callbacks fire synchronously on the read task, in the order the
/// transport ships its events.
#[derive(Clone, Default)]
pub(crate) struct Dispatcher {
    pub(crate) on_message: Option<MessageHandler>,
    pub(crate) on_error: Option<ErrorHandler>,
    pub(crate) on_close: Option<CloseHandler>,
}

impl Dispatcher {
    /// Decode a text frame and deliver it to the message handler.
    pub(crate) fn dispatch_text(&self, text: &str) {
        if let Some(handler) = &self.on_message {
            handler(Incoming::from_frame(text));
        }
    }

    /// Surface a transport error to the error handler.
    pub(crate) fn dispatch_error(&self, error: &SocketError) {
        if let Some(handler) = &self.on_error {
            handler(error);
        }
    }

    /// Notify the close handler that the transport closed.
    pub(crate) fn dispatch_close(&self) {
        if let Some(handler) = &self.on_close {
            handler();
        }
    }
}
