//! Application entry point.
//!
//! Initializes tracing, loads configuration from the environment, builds the
//! Axum router, and starts the HTTP server after the startup delay.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend_api::config::{AppConfig, DEFAULT_LOG_FILTER};
use backend_api::routes::create_router;
use backend_api::server::start_server;
use backend_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(greeting = %config.message, "Loaded configuration");

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
