// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_controller::DashboardController;
use crate::application::formatter::Formatter;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_trends_source::HttpTrendsSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let settings = &config.dashboard;

    // Data source (infrastructure layer)
    let source = Arc::new(HttpTrendsSource::new(
        settings.data_origin.clone(),
        Duration::from_secs(settings.request_timeout_secs),
    )?);

    // Controller (application layer)
    let formatter = Formatter::new(settings.locale, settings.viewer_offset()?);
    let controller = DashboardController::new(source, formatter);

    let state = Arc::new(AppState { controller });

    // Build router (presentation layer)
    let app = router(state, &config.server.public_dir);

    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        "Starting trend dashboard on {} (data from {})",
        addr,
        settings.data_origin
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
