//! Railway ID-card portal backend
//!
//! Serves the draft/submission record API over a SQLite-backed local record store.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use idcard_backend::config::Config;
use idcard_backend::{create_router, open_store, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ID-card portal backend");
    tracing::info!("Store backend: {:?}", config.store_backend);
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Simulated submit latency: {:?}", config.submit_delay);

    if config.submit_failure {
        tracing::warn!("RAILID_SUBMIT_FAILURE is set. Every submission will fail!");
    }

    // Open the local record store
    let store = open_store(&config).await?;

    let bind_addr = config.bind_addr;
    let state = AppState::new(store, config);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
