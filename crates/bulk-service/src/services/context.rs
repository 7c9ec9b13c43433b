//! Service context - dependency container for services
//!
//! Holds the repositories, the messaging gateway and the campaign routing
//! settings. Everything is constructed once by the entry point and shared.

use std::sync::Arc;

use bulk_common::MessagingConfig;
use bulk_core::traits::{
    CampaignRepository, HealthCheck, MessageLogRepository, MessagingGateway, ReplyRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Where campaign messages go and where the provider reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignSettings {
    /// Sender address, e.g. `whatsapp:+14155238886`
    pub from_address: String,
    /// The single recipient every campaign is sent to
    pub to_address: String,
    /// Public URL of this service's `/status` endpoint
    pub status_callback_url: Option<String>,
}

impl CampaignSettings {
    pub fn new(from_address: impl Into<String>, to_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
            to_address: to_address.into(),
            status_callback_url: None,
        }
    }

    pub fn with_status_callback(mut self, url: impl Into<String>) -> Self {
        self.status_callback_url = Some(url.into());
        self
    }
}

impl From<&MessagingConfig> for CampaignSettings {
    fn from(config: &MessagingConfig) -> Self {
        Self {
            from_address: config.from_address.clone(),
            to_address: config.to_address.clone(),
            status_callback_url: config.status_callback_url.clone(),
        }
    }
}

/// Service context containing all dependencies
///
/// Provides access to:
/// - Database repositories
/// - The storage health check
/// - The messaging gateway
/// - Campaign routing settings
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    campaign_repo: Arc<dyn CampaignRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    message_log_repo: Arc<dyn MessageLogRepository>,
    health_check: Arc<dyn HealthCheck>,

    // Outbound
    messaging: Arc<dyn MessagingGateway>,

    settings: CampaignSettings,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        campaign_repo: Arc<dyn CampaignRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
        message_log_repo: Arc<dyn MessageLogRepository>,
        health_check: Arc<dyn HealthCheck>,
        messaging: Arc<dyn MessagingGateway>,
        settings: CampaignSettings,
    ) -> Self {
        Self {
            campaign_repo,
            reply_repo,
            message_log_repo,
            health_check,
            messaging,
            settings,
        }
    }

    // === Repositories ===

    /// Get the campaign repository
    pub fn campaign_repo(&self) -> &dyn CampaignRepository {
        self.campaign_repo.as_ref()
    }

    /// Get the reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// Get the message log repository
    pub fn message_log_repo(&self) -> &dyn MessageLogRepository {
        self.message_log_repo.as_ref()
    }

    /// Get the storage health check
    pub fn health_check(&self) -> &dyn HealthCheck {
        self.health_check.as_ref()
    }

    // === Outbound ===

    /// Get the messaging gateway
    pub fn messaging(&self) -> &dyn MessagingGateway {
        self.messaging.as_ref()
    }

    pub fn settings(&self) -> &CampaignSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("messaging", &"MessagingGateway")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    campaign_repo: Option<Arc<dyn CampaignRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    message_log_repo: Option<Arc<dyn MessageLogRepository>>,
    health_check: Option<Arc<dyn HealthCheck>>,
    messaging: Option<Arc<dyn MessagingGateway>>,
    settings: Option<CampaignSettings>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn campaign_repo(mut self, repo: Arc<dyn CampaignRepository>) -> Self {
        self.campaign_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn message_log_repo(mut self, repo: Arc<dyn MessageLogRepository>) -> Self {
        self.message_log_repo = Some(repo);
        self
    }

    pub fn health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_check = Some(check);
        self
    }

    pub fn messaging(mut self, gateway: Arc<dyn MessagingGateway>) -> Self {
        self.messaging = Some(gateway);
        self
    }

    pub fn settings(mut self, settings: CampaignSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.campaign_repo
                .ok_or_else(|| ServiceError::validation("campaign_repo is required"))?,
            self.reply_repo
                .ok_or_else(|| ServiceError::validation("reply_repo is required"))?,
            self.message_log_repo
                .ok_or_else(|| ServiceError::validation("message_log_repo is required"))?,
            self.health_check
                .ok_or_else(|| ServiceError::validation("health_check is required"))?,
            self.messaging
                .ok_or_else(|| ServiceError::validation("messaging is required"))?,
            self.settings
                .ok_or_else(|| ServiceError::validation("settings is required"))?,
        ))
    }
}
