//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use bulk_common::{AppConfig, AppError};
use bulk_db::{
    create_pool, PgCampaignRepository, PgHealthCheck, PgMessageLogRepository, PgReplyRepository,
};
use bulk_messaging::TwilioClient;
use bulk_service::{CampaignSettings, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes sit outside the rate limiter.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(router.merge(health_routes()).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = bulk_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create messaging client
    let messaging = TwilioClient::from_config(&config.messaging)?;
    info!(
        api_base = %config.messaging.api_base,
        from = %config.messaging.from_address,
        to = %config.messaging.to_address,
        "Messaging client ready"
    );

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .campaign_repo(Arc::new(PgCampaignRepository::new(pool.clone())))
        .reply_repo(Arc::new(PgReplyRepository::new(pool.clone())))
        .message_log_repo(Arc::new(PgMessageLogRepository::new(pool.clone())))
        .health_check(Arc::new(PgHealthCheck::new(pool)))
        .messaging(Arc::new(messaging))
        .settings(CampaignSettings::from(&config.messaging))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
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
    let app = create_app(state)?;

    // Run server
    run_server(app, addr).await
}
