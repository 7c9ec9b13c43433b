//! Request DTOs for API endpoints
//!
//! The campaign request is JSON; its required fields are checked by the
//! campaign service. Callback payloads use the provider's PascalCase field
//! names and arrive either form-encoded or as JSON.

use serde::{Deserialize, Deserializer};

// ============================================================================
// Campaign Requests
// ============================================================================

/// Create campaign request
///
/// `user_id` and `message` are optional at the wire level so that a missing
/// field produces the same validation error as an empty one. Lengths are
/// not capped here; the provider enforces its own body limit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCampaignRequest {
    pub user_id: Option<i64>,
    pub message: Option<String>,
    pub duration_type: Option<String>,
}

impl CreateCampaignRequest {
    pub fn new(user_id: i64, message: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            message: Some(message.into()),
            duration_type: None,
        }
    }

    pub fn with_duration_type(mut self, duration_type: impl Into<String>) -> Self {
        self.duration_type = Some(duration_type.into());
        self
    }
}

// ============================================================================
// Provider Callbacks
// ============================================================================

/// Inbound reply webhook payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyCallback {
    #[serde(rename = "Body", default)]
    pub body: Option<String>,

    #[serde(rename = "From", default)]
    pub from: Option<String>,
}

/// Delivery status webhook payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusCallback {
    #[serde(rename = "MessageStatus", default)]
    pub message_status: Option<String>,

    #[serde(rename = "To", default)]
    pub to: Option<String>,

    #[serde(rename = "MessageSid", default)]
    pub message_sid: Option<String>,

    /// Form posts carry this as text, JSON posts may carry a number
    #[serde(rename = "ErrorCode", default, deserialize_with = "string_or_number")]
    pub error_code: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) if text.is_empty() => None,
        Some(Raw::Text(text)) => Some(text),
        Some(Raw::Number(number)) => Some(number.to_string()),
        None => None,
    })
}
