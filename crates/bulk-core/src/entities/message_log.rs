//! MessageLog entity - per-recipient delivery record backing analytics

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{CampaignId, DeliveryStatus, MessageLogId};

/// MessageLog entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLog {
    pub id: MessageLogId,
    pub campaign_id: Option<CampaignId>,
    pub provider_message_id: Option<String>,
    pub recipient: String,
    pub status: DeliveryStatus,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// MessageLog data before storage assigns `id` and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessageLog {
    pub campaign_id: Option<CampaignId>,
    pub provider_message_id: Option<String>,
    pub recipient: String,
    pub status: DeliveryStatus,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl NewMessageLog {
    /// Log entry for a message the provider accepted
    pub fn sent(
        campaign_id: CampaignId,
        provider_message_id: String,
        recipient: String,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            campaign_id: Some(campaign_id),
            provider_message_id: Some(provider_message_id),
            recipient,
            status,
            error_code: None,
            error_message: None,
        }
    }

    /// Log entry for a send the provider rejected
    pub fn failed(
        campaign_id: CampaignId,
        recipient: String,
        error_code: Option<String>,
        error_message: String,
    ) -> Self {
        Self {
            campaign_id: Some(campaign_id),
            provider_message_id: None,
            recipient,
            status: DeliveryStatus::Failed,
            error_code,
            error_message: Some(error_message),
        }
    }
}

/// Delivery counts for a single campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CampaignStats {
    pub total_sent: i64,
    pub delivered: i64,
    pub failed: i64,
}

impl CampaignStats {
    /// Tally a set of statuses the same way the storage aggregate does
    pub fn from_statuses<'a>(statuses: impl IntoIterator<Item = &'a DeliveryStatus>) -> Self {
        statuses.into_iter().fold(Self::default(), |mut acc, status| {
            acc.total_sent += 1;
            if status.is_delivered() {
                acc.delivered += 1;
            } else if status.is_failed() {
                acc.failed += 1;
            }
            acc
        })
    }
}
