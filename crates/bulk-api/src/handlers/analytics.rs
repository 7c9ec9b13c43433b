//! Analytics handlers

use axum::{
    extract::{Path, State},
    Json,
};
use bulk_service::{AnalyticsService, CampaignStatsResponse};

use crate::extractors::CampaignIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Delivery counts for one campaign
///
/// GET /analytics/{campaign_id}
pub async fn get_campaign_stats(
    State(state): State<AppState>,
    Path(path): Path<CampaignIdPath>,
) -> ApiResult<Json<CampaignStatsResponse>> {
    let service = AnalyticsService::new(state.service_context());
    let stats = service.get_campaign_stats(path.campaign_id()).await?;
    Ok(Json(stats))
}
