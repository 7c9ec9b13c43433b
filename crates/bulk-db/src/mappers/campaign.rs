//! Campaign entity <-> model mapper

use bulk_core::entities::{Campaign, NewCampaign};
use bulk_core::value_objects::{CampaignId, DurationType};

use crate::models::CampaignModel;

/// Convert CampaignModel to Campaign entity
impl From<CampaignModel> for Campaign {
    fn from(model: CampaignModel) -> Self {
        Campaign {
            id: CampaignId::new(model.id),
            user_id: model.user_id,
            message: model.message,
            duration_type: DurationType::from(model.duration_type),
            created_at: model.created_at,
        }
    }
}

/// Values bound when inserting a campaign
pub struct CampaignInsert<'a> {
    pub user_id: i64,
    pub message: &'a str,
    pub duration_type: &'a str,
}

impl<'a> CampaignInsert<'a> {
    pub fn new(campaign: &'a NewCampaign) -> Self {
        Self {
            user_id: campaign.user_id,
            message: &campaign.message,
            duration_type: campaign.duration_type.as_str(),
        }
    }
}
