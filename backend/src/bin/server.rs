//! Shift board HTTP server binary.
//!
//! Loads the configuration, builds the read-only shift store, sets up the
//! HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve the built-in sample plan
//! cargo run --bin shiftboard-server
//!
//! # Serve a JSON plan snapshot
//! PLAN_FILE=data/plan.json cargo run --bin shiftboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `SHIFTBOARD_CONFIG`: Config file (default: ./shiftboard.toml if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PLAN_FILE`: JSON plan snapshot to serve instead of the sample plan
//! - `RUST_LOG`: Log filter (default: info)

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shiftboard::config::AppConfig;
use shiftboard::db::RepositoryFactory;
use shiftboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting shift board HTTP server");

    let source = config.data_source()?;
    let repository = RepositoryFactory::create(&source)?;
    info!("Repository initialized from {:?}", source);

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
