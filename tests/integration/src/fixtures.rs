//! Test fixtures and data generators
//!
//! Provides reusable request payloads, response shapes and configuration.

use bulk_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, MessagingConfig,
    RateLimitConfig, ServerConfig,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::fakes::{TEST_FROM, TEST_TO};

/// Counter for unique test data
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

/// Create campaign request
#[derive(Debug, Serialize)]
pub struct CreateCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<String>,
}

impl CreateCampaignRequest {
    pub fn new(user_id: i64, message: &str) -> Self {
        Self {
            user_id: Some(user_id),
            message: Some(message.to_string()),
            duration_type: None,
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self::new(1000 + suffix, &format!("Campaign message {suffix}"))
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Campaign created response
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct CampaignCreatedResponse {
    pub campaign_id: i64,
    pub status: String,
    pub twilio_sid: String,
}

/// Reply response
#[derive(Debug, Deserialize)]
pub struct ReplyResponse {
    pub id: i64,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub received_at: String,
}

/// Campaign stats response
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct CampaignStatsResponse {
    pub total_sent: i64,
    pub delivered: i64,
    pub failed: i64,
}

impl CampaignStatsResponse {
    pub fn new(total_sent: i64, delivered: i64, failed: i64) -> Self {
        Self {
            total_sent,
            delivered,
            failed,
        }
    }
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a server whose backends are injected directly.
///
/// The database URL and provider credentials are placeholders and never used.
pub fn in_memory_config() -> AppConfig {
    config_with("postgresql://unused", "http://127.0.0.1:9")
}

/// Configuration pointing at a real database and a (mock) provider endpoint
pub fn config_with(database_url: &str, provider_base: &str) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "bulk-messenger-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 5,
            min_connections: 1,
        },
        messaging: MessagingConfig {
            account_sid: "ACtest".to_string(),
            auth_token: "test-token".to_string(),
            api_base: provider_base.to_string(),
            from_address: TEST_FROM.to_string(),
            to_address: TEST_TO.to_string(),
            status_callback_url: None,
            timeout_secs: 5,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig::default(),
    }
}
