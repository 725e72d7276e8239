mod builder;
mod connection;
mod core;
mod state;

pub use builder::{SocketClientBuilder, SocketOptions};
pub use connection::{ConnectionManager, ConnectionState};
pub use core::SocketClient;

pub(crate) use state::ClientState;
