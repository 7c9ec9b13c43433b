//! Campaign handlers
//!
//! Endpoint for creating a campaign and sending its message.

use axum::{extract::State, Json};
use bulk_service::{CampaignCreatedResponse, CampaignService, CreateCampaignRequest};

use crate::extractors::JsonBody;
use crate::response::ApiResult;
use crate::state::AppState;

/// Create campaign
///
/// POST /campaign
pub async fn create_campaign(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCampaignRequest>,
) -> ApiResult<Json<CampaignCreatedResponse>> {
    let service = CampaignService::new(state.service_context());
    let response = service.create_campaign(request).await?;
    Ok(Json(response))
}
