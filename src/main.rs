// Main entry point - Configuration, dependency injection and command dispatch
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotel_maintenance::application::session::MaintenanceSession;
use hotel_maintenance::infrastructure::config::load_config;
use hotel_maintenance::infrastructure::http_backend::HttpMaintenanceBackend;
use hotel_maintenance::presentation::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so rendered views stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply_overrides(load_config()?);
    tracing::debug!("Using prediction service at {}", config.backend.base_url);

    // Backend (infrastructure layer)
    let backend = Arc::new(HttpMaintenanceBackend::new(config.backend.base_url.clone()));

    // Session owns the cache every view-controller shares (application layer)
    let session = MaintenanceSession::new(backend, config.views);

    let output = cli::run(cli.command, &session, Local::now().date_naive()).await?;
    println!("{output}");

    Ok(())
}
