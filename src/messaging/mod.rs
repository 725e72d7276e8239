mod dispatcher;
mod payload;

pub use dispatcher::{CloseHandler, ErrorHandler, MessageHandler};
pub use payload::Incoming;

pub(crate) use dispatcher::Dispatcher;
