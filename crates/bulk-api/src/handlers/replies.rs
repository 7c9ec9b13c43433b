//! Reply handlers

use axum::{extract::State, Json};
use bulk_service::{ReplyResponse, ReplyService};

use crate::response::ApiResult;
use crate::state::AppState;

/// List replies, newest first
///
/// GET /replies
pub async fn list_replies(State(state): State<AppState>) -> ApiResult<Json<Vec<ReplyResponse>>> {
    let service = ReplyService::new(state.service_context());
    let replies = service.list_replies().await?;
    Ok(Json(replies))
}
