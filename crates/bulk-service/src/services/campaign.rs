//! Campaign service
//!
//! Records a campaign and hands its message to the provider.

use bulk_core::entities::{Campaign, NewCampaign, NewMessageLog};
use bulk_core::traits::OutboundMessage;
use bulk_core::{DomainError, DurationType};
use tracing::{error, info, instrument, warn};

use crate::dto::{CampaignCreatedResponse, CreateCampaignRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const REQUIRED_FIELDS: &str = "user_id and message are required";

/// Campaign service
pub struct CampaignService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CampaignService<'a> {
    /// Create a new CampaignService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist a campaign, then send its message to the configured recipient.
    ///
    /// The campaign row is written first and is kept if the send fails.
    #[instrument(skip(self, request), fields(user_id = ?request.user_id))]
    pub async fn create_campaign(
        &self,
        request: CreateCampaignRequest,
    ) -> ServiceResult<CampaignCreatedResponse> {
        let new_campaign = Self::validate(request)?;

        let campaign = self.ctx.campaign_repo().create(&new_campaign).await?;
        info!(campaign_id = %campaign.id, "Campaign created");

        let settings = self.ctx.settings();
        let outbound = OutboundMessage::new(
            settings.from_address.as_str(),
            settings.to_address.as_str(),
            campaign.message.as_str(),
        )
        .with_status_callback(settings.status_callback_url.clone());

        let receipt = match self.ctx.messaging().send(&outbound).await {
            Ok(receipt) => receipt,
            Err(err) => {
                self.flag_orphaned_campaign(&campaign, &err).await;
                return Err(err.into());
            }
        };

        info!(
            campaign_id = %campaign.id,
            sid = %receipt.provider_message_id,
            "Campaign message sent"
        );

        // The message is already out; a missing log row only affects analytics
        let log = NewMessageLog::sent(
            campaign.id,
            receipt.provider_message_id.clone(),
            settings.to_address.clone(),
            receipt.status,
        );
        if let Err(err) = self.ctx.message_log_repo().create(&log).await {
            warn!(campaign_id = %campaign.id, error = %err, "Failed to record message log");
        }

        Ok(CampaignCreatedResponse::sent(
            campaign.id.into_inner(),
            receipt.provider_message_id,
        ))
    }

    /// Record that a campaign was stored but its message never left.
    ///
    /// Writes a `failed` log row so analytics counts the attempt. Never fails;
    /// problems here are logged and the caller keeps its original error.
    #[instrument(skip(self, campaign, cause), fields(campaign_id = %campaign.id))]
    pub async fn flag_orphaned_campaign(&self, campaign: &Campaign, cause: &DomainError) {
        warn!(error = %cause, "Campaign stored but message was not sent");

        let error_code = match cause {
            DomainError::MessagingError { code, .. } => code.map(|c| c.to_string()),
            other => Some(other.code().to_string()),
        };
        let log = NewMessageLog::failed(
            campaign.id,
            self.ctx.settings().to_address.clone(),
            error_code,
            cause.to_string(),
        );

        if let Err(err) = self.ctx.message_log_repo().create(&log).await {
            error!(error = %err, "Failed to flag orphaned campaign");
        }
    }

    fn validate(request: CreateCampaignRequest) -> ServiceResult<NewCampaign> {
        let user_id = request.user_id.filter(|id| *id != 0);
        let message = request.message.filter(|m| !m.is_empty());

        match (user_id, message) {
            (Some(user_id), Some(message)) => Ok(NewCampaign::new(
                user_id,
                message,
                DurationType::from_optional(request.duration_type.as_deref()),
            )),
            _ => Err(ServiceError::validation(REQUIRED_FIELDS)),
        }
    }
}
