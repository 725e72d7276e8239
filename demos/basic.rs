use socklink::{SocketClient, SocketOptions};

/// Connect to a streaming backend, send one prompt, and print the
/// streamed chunks until interrupted.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let origin =
        std::env::var("APP_ORIGIN").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

    println!("connecting to {origin}");

    let client = SocketClient::new(
        &origin,
        "/api/llm/stream",
        SocketOptions::default()
            .on_message(|msg| println!("<- {msg:?}"))
            .on_error(|e| eprintln!("transport error: {e}"))
            .on_close(|| println!("connection closed")),
    )?;

    client.connect().await?;
    client
        .send(&serde_json::json!({ "prompt": "Tell me a story about a robot" }))
        .await?;

    println!("streaming; press ctrl-c to quit");
    tokio::signal::ctrl_c().await?;

    client.disconnect().await;
    Ok(())
}
