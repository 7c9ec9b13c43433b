//! Campaign entity - one request to send a message, recorded before the send

use chrono::{DateTime, Utc};

use crate::value_objects::{CampaignId, DurationType};

/// Campaign entity
///
/// Created once per campaign request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: CampaignId,
    pub user_id: i64,
    pub message: String,
    pub duration_type: DurationType,
    pub created_at: DateTime<Utc>,
}

/// Campaign data before storage assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampaign {
    pub user_id: i64,
    pub message: String,
    pub duration_type: DurationType,
}

impl NewCampaign {
    pub fn new(user_id: i64, message: String, duration_type: DurationType) -> Self {
        Self {
            user_id,
            message,
            duration_type,
        }
    }

    /// Attach the storage-assigned fields
    pub fn into_campaign(self, id: CampaignId, created_at: DateTime<Utc>) -> Campaign {
        Campaign {
            id,
            user_id: self.user_id,
            message: self.message,
            duration_type: self.duration_type,
            created_at,
        }
    }
}
