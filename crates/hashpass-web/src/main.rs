//! Hashpass web server.

use hashpass_web::{app, config::bind_address};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "hashpass_web=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let addr = bind_address()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app()).await?;
    Ok(())
}
