//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use bulk_core::entities::{CampaignStats, Reply};

use super::responses::{CampaignStatsResponse, ReplyResponse};

impl From<&Reply> for ReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id.into_inner(),
            phone: reply.phone.clone(),
            message: reply.message.clone(),
            received_at: reply.received_at,
        }
    }
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id.into_inner(),
            phone: reply.phone,
            message: reply.message,
            received_at: reply.received_at,
        }
    }
}

impl From<CampaignStats> for CampaignStatsResponse {
    fn from(stats: CampaignStats) -> Self {
        Self {
            total_sent: stats.total_sent,
            delivered: stats.delivered,
            failed: stats.failed,
        }
    }
}
