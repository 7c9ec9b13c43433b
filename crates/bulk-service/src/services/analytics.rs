//! Analytics service
//!
//! Per-campaign delivery counts derived from message logs.

use bulk_core::CampaignId;
use tracing::{debug, instrument};

use crate::dto::CampaignStatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Analytics service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new AnalyticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Counts for the campaign named by a raw path segment.
    ///
    /// The campaign does not have to exist. A segment that is not a number
    /// cannot match any log row, so it yields zeros without a storage round-trip.
    #[instrument(skip(self))]
    pub async fn get_campaign_stats(&self, campaign_id: &str) -> ServiceResult<CampaignStatsResponse> {
        let Ok(campaign_id) = CampaignId::parse(campaign_id) else {
            debug!("Non-numeric campaign id, reporting zero counts");
            return Ok(CampaignStatsResponse::default());
        };

        let stats = self
            .ctx
            .message_log_repo()
            .stats_for_campaign(campaign_id)
            .await?;

        Ok(stats.into())
    }
}
