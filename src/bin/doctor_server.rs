// API Server Binary Entry Point
//
// Purpose: Start the Axum server for the form page and JSON API
// Usage: cargo run --features api --bin doctor_server

use config_doctor::{create_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "config_doctor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting server...");

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  BIND: {}", config.socket_addr());
    tracing::info!("  PRESETS_PATH: {:?}", config.presets_path);
    tracing::info!("  ANALYTICS_LOG: {:?}", config.analytics_log);

    let state = AppState::new(&config)?;
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
