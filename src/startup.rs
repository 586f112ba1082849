//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tokio::net::TcpListener;

use crate::application::services::{
    DogService, DogServiceImpl, ReferenceDataService, ReferenceDataServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database::{self, MIGRATOR};
use crate::infrastructure::repositories::{
    SqliteDogRepository, SqliteDogStatusRepository, SqliteLeavingReasonRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub settings: Arc<Settings>,
    pub dog_service: Arc<dyn DogService>,
    pub reference_service: Arc<dyn ReferenceDataService>,
}

impl AppState {
    /// Wire repositories and services on top of a migrated pool
    pub fn new(db: SqlitePool, settings: Settings) -> Self {
        let dog_repo = Arc::new(SqliteDogRepository::new(db.clone()));
        let status_repo = Arc::new(SqliteDogStatusRepository::new(db.clone()));
        let reason_repo = Arc::new(SqliteLeavingReasonRepository::new(db.clone()));

        let dog_service = DogServiceImpl::new(dog_repo, status_repo.clone(), reason_repo.clone());
        let reference_service = ReferenceDataServiceImpl::new(status_repo, reason_repo);

        Self {
            db,
            settings: Arc::new(settings),
            dog_service: Arc::new(dog_service),
            reference_service: Arc::new(reference_service),
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        Self::build_with_migrations(settings, &MIGRATOR).await
    }

    /// Build the application, migrating the database with `migrator`
    ///
    /// Nothing is bound unless every migration succeeds.
    pub async fn build_with_migrations(
        settings: Settings,
        migrator: &Migrator,
    ) -> Result<Self> {
        handlers::health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to create database pool")?;
        tracing::info!(
            max_connections = settings.database.max_connections,
            "Database connection pool created"
        );

        // Bring the schema up to date
        let report = database::migrate(migrator, &db)
            .await
            .context("Database migration failed")?;
        tracing::info!(
            applied = report.applied_count(),
            schema_version = ?report.current_version,
            "Database schema up to date"
        );

        let addr = settings
            .server
            .socket_addr()
            .context("Invalid server address")?;
        let cors = create_cors_layer(&settings.cors);
        let state = AppState::new(db, settings);

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(create_trace_layer())
            .layer(cors);

        // Bind to address
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// The fully layered router, for driving requests without a socket
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
