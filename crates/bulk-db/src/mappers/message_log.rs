//! MessageLog entity <-> model mapper

use bulk_core::entities::{CampaignStats, MessageLog, NewMessageLog};
use bulk_core::value_objects::{CampaignId, DeliveryStatus, MessageLogId};

use crate::models::{CampaignStatsModel, MessageLogModel};

/// Convert MessageLogModel to MessageLog entity
impl From<MessageLogModel> for MessageLog {
    fn from(model: MessageLogModel) -> Self {
        MessageLog {
            id: MessageLogId::new(model.id),
            campaign_id: model.campaign_id.map(CampaignId::new),
            provider_message_id: model.provider_message_id,
            recipient: model.recipient,
            status: DeliveryStatus::from(model.status),
            error_code: model.error_code,
            error_message: model.error_message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CampaignStatsModel> for CampaignStats {
    fn from(model: CampaignStatsModel) -> Self {
        CampaignStats {
            total_sent: model.total_sent,
            delivered: model.delivered,
            failed: model.failed,
        }
    }
}

/// Values bound when inserting a message log
pub struct MessageLogInsert<'a> {
    pub campaign_id: Option<i64>,
    pub provider_message_id: Option<&'a str>,
    pub recipient: &'a str,
    pub status: &'a str,
    pub error_code: Option<&'a str>,
    pub error_message: Option<&'a str>,
}

impl<'a> MessageLogInsert<'a> {
    pub fn new(log: &'a NewMessageLog) -> Self {
        Self {
            campaign_id: log.campaign_id.map(CampaignId::into_inner),
            provider_message_id: log.provider_message_id.as_deref(),
            recipient: &log.recipient,
            status: log.status.as_str(),
            error_code: log.error_code.as_deref(),
            error_message: log.error_message.as_deref(),
        }
    }
}
