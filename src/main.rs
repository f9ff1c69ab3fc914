// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::sensor_service::SensorService;
use crate::domain::figure::validate_tables;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_store::InMemoryStatusStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{figure_svg, get_sensors, health_check, index, submit_sensors};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    validate_tables()?;

    // Create store (infrastructure layer)
    let store = Arc::new(InMemoryStatusStore::new());

    // Create services (application layer)
    let sensor_service = SensorService::new(
        store,
        app_config.figure.painter(),
        app_config.figure.background.clone(),
    );

    // Create application state
    let state = Arc::new(AppState { sensor_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/sensors", get(get_sensors).post(submit_sensors))
        .route("/figure.svg", get(figure_svg))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = app_config.server.addr().await?;
    tracing::info!(
        "Starting sensor-figure service on {} ({}x{} canvas)",
        addr,
        app_config.figure.width,
        app_config.figure.height
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
