//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use conduit_common::{AppConfig, AppError, JwtService};
use conduit_db::{create_pool, run_migrations, DatabaseConfig};
use conduit_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, MiddlewareConfig};
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let middleware_config = MiddlewareConfig {
        request_timeout: Duration::from_secs(config.request_timeout_seconds),
        cors: config.cors.clone(),
        is_production: config.app.env.is_production(),
    };

    let router = create_router();
    let router = apply_middleware(router, &middleware_config);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    let db_config = DatabaseConfig::from(&config.database);
    info!(url = %db_config.url, "Connecting to SQLite...");
    let pool = create_pool(&db_config)
        .await
        .map_err(AppError::internal)?;
    run_migrations(&pool).await.map_err(AppError::internal)?;
    info!("SQLite schema ready");

    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.expiry_seconds);
    let service_context = ServiceContext::sqlite(pool, jwt_service, db_config.query_timeout);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until the listener fails or ctrl-c is received
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}
