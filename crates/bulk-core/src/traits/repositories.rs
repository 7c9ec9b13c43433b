//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Campaign, CampaignStats, MessageLog, NewCampaign, NewMessageLog, NewReply, Reply};
use crate::error::DomainError;
use crate::value_objects::{CampaignId, DeliveryStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Campaign Repository
// ============================================================================

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Insert a campaign; storage assigns the id and creation timestamp
    async fn create(&self, campaign: &NewCampaign) -> RepoResult<Campaign>;

    /// Find campaign by ID
    async fn find_by_id(&self, id: CampaignId) -> RepoResult<Option<Campaign>>;

    /// Total number of campaigns
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Append a reply; storage stamps `received_at`
    async fn create(&self, reply: &NewReply) -> RepoResult<Reply>;

    /// All replies, newest first
    async fn list_recent(&self) -> RepoResult<Vec<Reply>>;
}

// ============================================================================
// MessageLog Repository
// ============================================================================

#[async_trait]
pub trait MessageLogRepository: Send + Sync {
    /// Append a delivery record
    async fn create(&self, log: &NewMessageLog) -> RepoResult<MessageLog>;

    /// Set the status of the record carrying this provider message id.
    ///
    /// Follows [`DeliveryStatus::may_replace`]. Returns `false` when no record
    /// matches or the stored status is final and `status` is not.
    async fn update_status_by_provider_id(
        &self,
        provider_message_id: &str,
        status: &DeliveryStatus,
        error_code: Option<&str>,
    ) -> RepoResult<bool>;

    /// Count all, delivered and failed records for a campaign
    async fn stats_for_campaign(&self, campaign_id: CampaignId) -> RepoResult<CampaignStats>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trip to the storage backend
    async fn ping(&self) -> RepoResult<()>;
}
