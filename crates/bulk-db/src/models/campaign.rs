//! Campaign database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for campaigns table
#[derive(Debug, Clone, FromRow)]
pub struct CampaignModel {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub duration_type: String,
    pub created_at: DateTime<Utc>,
}
