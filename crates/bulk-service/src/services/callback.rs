//! Callback service
//!
//! Ingests the provider's inbound-reply and delivery-status webhooks.

use bulk_core::entities::NewReply;
use bulk_core::DeliveryStatus;
use tracing::{debug, info, instrument, warn};

use crate::dto::{ReplyCallback, StatusCallback};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// What a status callback did to stored delivery state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// A message log row was updated
    Updated,
    /// No record took the update: the message is unknown, or it already holds
    /// a final status and the callback arrived late
    NotApplied,
    /// The callback carried no message id or no status
    Logged,
}

/// Callback service
pub struct CallbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CallbackService<'a> {
    /// Create a new CallbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an inbound reply exactly as received
    #[instrument(skip(self, callback))]
    pub async fn record_reply(&self, callback: ReplyCallback) -> ServiceResult<()> {
        let reply = self
            .ctx
            .reply_repo()
            .create(&NewReply::new(callback.from, callback.body))
            .await?;

        info!(reply_id = %reply.id, phone = ?reply.phone, "Reply received");
        Ok(())
    }

    /// Log a delivery status change and apply it to the matching message log
    #[instrument(skip(self, callback), fields(sid = ?callback.message_sid))]
    pub async fn record_status(&self, callback: StatusCallback) -> ServiceResult<StatusOutcome> {
        info!(
            to = ?callback.to,
            status = ?callback.message_status,
            error_code = ?callback.error_code,
            "Status callback"
        );

        let (Some(sid), Some(status)) = (
            callback.message_sid.as_deref().filter(|s| !s.is_empty()),
            callback.message_status.as_deref().filter(|s| !s.is_empty()),
        ) else {
            debug!("Status callback without message sid or status, nothing to update");
            return Ok(StatusOutcome::Logged);
        };

        let status = DeliveryStatus::from(status);
        let updated = self
            .ctx
            .message_log_repo()
            .update_status_by_provider_id(sid, &status, callback.error_code.as_deref())
            .await?;

        if updated {
            Ok(StatusOutcome::Updated)
        } else {
            warn!(sid, %status, "Status callback not applied: unknown message or already final");
            Ok(StatusOutcome::NotApplied)
        }
    }
}
