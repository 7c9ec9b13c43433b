//! Provider webhook handlers
//!
//! Inbound replies and delivery status callbacks.

use axum::extract::State;
use bulk_service::{CallbackService, ReplyCallback, StatusCallback};

use crate::extractors::WebhookPayload;
use crate::response::{ApiResult, EmptyTwiml};
use crate::state::AppState;

/// Inbound reply
///
/// POST /webhook
pub async fn receive_reply(
    State(state): State<AppState>,
    WebhookPayload(callback): WebhookPayload<ReplyCallback>,
) -> ApiResult<EmptyTwiml> {
    let service = CallbackService::new(state.service_context());
    service.record_reply(callback).await?;
    Ok(EmptyTwiml)
}

/// Delivery status change
///
/// POST /status
pub async fn receive_status(
    State(state): State<AppState>,
    WebhookPayload(callback): WebhookPayload<StatusCallback>,
) -> ApiResult<&'static str> {
    let service = CallbackService::new(state.service_context());
    service.record_status(callback).await?;
    Ok("OK")
}
