//! # K9 Registry
//!
//! Registry service for working dogs.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and schema migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use k9_registry::config::Settings;
use k9_registry::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    k9_registry::telemetry::init_tracing();

    info!("Starting K9 Registry...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        address = %settings.server_addr(),
        base_path = %settings.server.base_path,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
