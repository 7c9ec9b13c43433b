//! Twilio Messages API payloads

use serde::Deserialize;

/// Subset of the message resource returned on a successful create
#[derive(Debug, Deserialize)]
pub(crate) struct MessageResource {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}
