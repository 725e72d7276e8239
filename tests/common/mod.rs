#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;

/// How the loopback server treats each accepted connection.
#[derive(Clone)]
pub enum ServerBehavior {
    /// Hold the connection open and record inbound text frames
    Accept,
    /// Send these frames after the handshake, then hold open
    Greet(Vec<String>),
    /// Close each connection right after the handshake
    CloseAfterAccept,
}

/// Loopback WebSocket server for driving the client end to end.
pub struct TestServer {
    pub addr: SocketAddr,
    /// One instant per accepted connection, in order
    pub accepts: mpsc::UnboundedReceiver<Instant>,
    /// Text frames received from clients, in order
    pub frames: mpsc::UnboundedReceiver<String>,
    /// One notification per connection that ended
    pub closed: mpsc::UnboundedReceiver<()>,
}

impl TestServer {
    /// Origin to hand to the client; insecure scheme, loopback host.
    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }
}

pub async fn spawn_server(behavior: ServerBehavior) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let (accept_tx, accepts) = mpsc::unbounded_channel();
    let (frame_tx, frames) = mpsc::unbounded_channel();
    let (closed_tx, closed) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else { break };
            let Ok(ws) = tokio_tungstenite::accept_async(stream).await else { continue };
            let _ = accept_tx.send(Instant::now());

            let behavior = behavior.clone();
            let frame_tx = frame_tx.clone();
            let closed_tx = closed_tx.clone();
            tokio::spawn(async move {
                serve_connection(ws, behavior, frame_tx).await;
                let _ = closed_tx.send(());
            });
        }
    });

    TestServer {
        addr,
        accepts,
        frames,
        closed,
    }
}

async fn serve_connection(
    mut ws: WebSocketStream<TcpStream>,
    behavior: ServerBehavior,
    frame_tx: mpsc::UnboundedSender<String>,
) {
    match behavior {
        ServerBehavior::CloseAfterAccept => {
            let _ = ws.close(None).await;
            // drain until the peer acknowledges the close
            while let Some(Ok(_)) = ws.next().await {}
        }
        ServerBehavior::Greet(greetings) => {
            for text in greetings {
                if ws.send(Message::Text(text.into())).await.is_err() {
                    return;
                }
            }
            drain(&mut ws, &frame_tx).await;
        }
        ServerBehavior::Accept => drain(&mut ws, &frame_tx).await,
    }
}

async fn drain(ws: &mut WebSocketStream<TcpStream>, frame_tx: &mpsc::UnboundedSender<String>) {
    while let Some(Ok(message)) = ws.next().await {
        if let Message::Text(text) = message {
            let _ = frame_tx.send(text.as_str().to_owned());
        }
    }
}

/// Receive from `rx`, failing the test politely on timeout.
pub async fn recv_within<T>(rx: &mut mpsc::UnboundedReceiver<T>, millis: u64) -> Option<T> {
    tokio::time::timeout(Duration::from_millis(millis), rx.recv())
        .await
        .ok()
        .flatten()
}
