// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::{get, post, put}, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::chart_renderer::RollingWindowRenderer;
use crate::application::session_controller::SessionController;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_backend::HttpMonitorBackend;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_monitor, health_check, networks_updated, select_network, start_monitoring, stop_monitoring,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration
    let config = load_app_config()?;

    // Create backend client (infrastructure layer)
    let backend = Arc::new(HttpMonitorBackend::new(&config.backend)?);

    // Create controller (application layer)
    let renderer = RollingWindowRenderer::new(config.chart.clone());
    let controller = SessionController::new(backend, renderer);

    let state = Arc::new(AppState {
        controller,
        defaults: config.monitor.clone(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/monitor", get(get_monitor))
        .route("/monitor/start", post(start_monitoring))
        .route("/monitor/stop", post(stop_monitoring))
        .route("/monitor/selection", put(select_network))
        .route("/networks", post(networks_updated))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        "Starting signal-monitor on {} (backend {})",
        addr,
        config.backend.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
