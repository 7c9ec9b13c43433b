//! Reply database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: i64,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub received_at: DateTime<Utc>,
}
