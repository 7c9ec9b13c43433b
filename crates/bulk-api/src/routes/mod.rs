//! Route definitions
//!
//! The relay's public surface is mounted at the root path, matching the URLs
//! configured at the messaging provider.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{analytics, callbacks, campaigns, health, replies, root};
use crate::state::AppState;

/// Create the main router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::index))
        .merge(campaign_routes())
        .merge(webhook_routes())
        .merge(query_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Campaign routes
fn campaign_routes() -> Router<AppState> {
    Router::new().route("/campaign", post(campaigns::create_campaign))
}

/// Provider webhook routes
fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/webhook", post(callbacks::receive_reply))
        .route("/status", post(callbacks::receive_status))
}

/// Read-only routes
fn query_routes() -> Router<AppState> {
    Router::new()
        .route("/replies", get(replies::list_replies))
        .route("/analytics/:campaign_id", get(analytics::get_campaign_stats))
}
