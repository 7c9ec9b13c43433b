//! Reply entity - an inbound message received from a recipient

use chrono::{DateTime, Utc};

use crate::value_objects::ReplyId;

/// Reply entity
///
/// Append-only. `phone` and `message` are stored exactly as the provider sent
/// them, including absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: ReplyId,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub received_at: DateTime<Utc>,
}

/// Reply data before storage assigns `id` and `received_at`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewReply {
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl NewReply {
    pub fn new(phone: Option<String>, message: Option<String>) -> Self {
        Self { phone, message }
    }
}
