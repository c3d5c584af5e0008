//! HTTP server for the PDKS report assistant.
//!
//! Reads the configuration directory from `PDKS_CONFIG_DIR` (default
//! `./config/pdks`) and serves the seed data over `POST /report`,
//! `POST /chat` and `GET /status`. Log filtering follows `RUST_LOG`.

use std::error::Error;

use pdks_assistant::api::{AppState, create_router};
use pdks_assistant::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/pdks";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config_dir =
        std::env::var("PDKS_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let addr = config.settings().server.address();

    let app = create_router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(config_dir = %config_dir, "Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
