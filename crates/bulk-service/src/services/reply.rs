//! Reply service
//!
//! Read side of inbound replies.

use tracing::instrument;

use crate::dto::ReplyResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reply service
pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All stored replies, newest first
    #[instrument(skip(self))]
    pub async fn list_replies(&self) -> ServiceResult<Vec<ReplyResponse>> {
        let replies = self.ctx.reply_repo().list_recent().await?;
        Ok(replies.into_iter().map(ReplyResponse::from).collect())
    }
}
