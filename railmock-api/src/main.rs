use std::net::SocketAddr;
use anyhow::Context;
use railmock_api::{app, AppState};
use railmock_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "railmock_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting railmock on port {}", config.server.port);

    let app_state = AppState::from_config(&config).context("Invalid delay table")?;
    for (op, delay) in app_state.delays.snapshot() {
        if !delay.is_zero() {
            tracing::info!("Delay for {}: {:?}", op, delay);
        }
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
