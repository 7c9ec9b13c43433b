//! Message log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for message_logs table
#[derive(Debug, Clone, FromRow)]
pub struct MessageLogModel {
    pub id: i64,
    pub campaign_id: Option<i64>,
    pub provider_message_id: Option<String>,
    pub recipient: String,
    pub status: String,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row shape of the per-campaign aggregate
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CampaignStatsModel {
    pub total_sent: i64,
    pub delivered: i64,
    pub failed: i64,
}
