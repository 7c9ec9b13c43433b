//! Path parameter extractors

use serde::Deserialize;

/// Path parameters with campaign_id
///
/// Kept as raw text: a non-numeric id is a valid request that simply
/// matches no campaign.
#[derive(Debug, Deserialize)]
pub struct CampaignIdPath {
    pub campaign_id: String,
}

impl CampaignIdPath {
    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }
}
