//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Status reported for a campaign whose message the provider accepted
pub const CAMPAIGN_SENT_STATUS: &str = "Campaign Created + Twilio Sent";

// ============================================================================
// Campaign Responses
// ============================================================================

/// Result of `POST /campaign`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignCreatedResponse {
    pub campaign_id: i64,
    pub status: String,
    /// Provider message id of the send
    pub twilio_sid: String,
}

impl CampaignCreatedResponse {
    pub fn sent(campaign_id: i64, twilio_sid: impl Into<String>) -> Self {
        Self {
            campaign_id,
            status: CAMPAIGN_SENT_STATUS.to_string(),
            twilio_sid: twilio_sid.into(),
        }
    }
}

// ============================================================================
// Reply Responses
// ============================================================================

/// One stored inbound reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyResponse {
    pub id: i64,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub received_at: DateTime<Utc>,
}

// ============================================================================
// Analytics Responses
// ============================================================================

/// Delivery counts for one campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CampaignStatsResponse {
    pub total_sent: i64,
    pub delivered: i64,
    pub failed: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
