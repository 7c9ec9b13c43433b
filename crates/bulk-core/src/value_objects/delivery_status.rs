//! Delivery status reported by the messaging provider

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Delivery status of a single outbound message.
///
/// Known provider values get their own variant; anything else is kept as
/// `Other` so a new provider status never fails a callback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeliveryStatus {
    Accepted,
    Queued,
    Sending,
    Sent,
    Delivered,
    Undelivered,
    Failed,
    Read,
    Other(String),
}

impl DeliveryStatus {
    /// Wire values of the statuses after which the provider sends no progress
    pub const TERMINAL_VALUES: [&'static str; 4] = ["delivered", "undelivered", "failed", "read"];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Accepted => "accepted",
            Self::Queued => "queued",
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Undelivered => "undelivered",
            Self::Failed => "failed",
            Self::Read => "read",
            Self::Other(s) => s,
        }
    }

    /// Counted as `delivered` by campaign analytics
    #[inline]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Counted as `failed` by campaign analytics
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// No further progress is expected after a terminal status
    pub fn is_terminal(&self) -> bool {
        Self::TERMINAL_VALUES.contains(&self.as_str())
    }

    /// Whether a callback carrying `self` may overwrite a stored `current`.
    ///
    /// Callbacks can arrive out of order; a late non-terminal status never
    /// replaces a terminal one.
    pub fn may_replace(&self, current: &DeliveryStatus) -> bool {
        self.is_terminal() || !current.is_terminal()
    }
}

impl From<&str> for DeliveryStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "accepted" => Self::Accepted,
            "queued" => Self::Queued,
            "sending" => Self::Sending,
            "sent" => Self::Sent,
            "delivered" => Self::Delivered,
            "undelivered" => Self::Undelivered,
            "failed" => Self::Failed,
            "read" => Self::Read,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<String> for DeliveryStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DeliveryStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeliveryStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}
