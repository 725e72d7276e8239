use std::time::Duration;

use socklink::{SocketClient, SocketOptions};

/// Watch reconnection behavior against a real backend: interrupt the
/// network (or restart the server) while this runs and watch the
/// status flip and recover.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let origin =
        std::env::var("APP_ORIGIN").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

    let client = SocketClient::new(
        &origin,
        "/api/llm/stream",
        SocketOptions::default()
            .reconnect_delay(Duration::from_millis(2000))
            .on_close(|| println!("! transport closed")),
    )?;

    client.connect().await?;
    println!("connected; interrupt the server to watch auto-reconnect");

    let mut status = client.watch_status();
    for _ in 0..30 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let open = *status.borrow_and_update();
        println!("status: {}", if open { "connected" } else { "disconnected" });
    }

    client.disconnect().await;
    println!("disconnected manually, no further attempts");
    Ok(())
}
