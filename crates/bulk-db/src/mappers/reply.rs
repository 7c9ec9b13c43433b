//! Reply entity <-> model mapper

use bulk_core::entities::{NewReply, Reply};
use bulk_core::value_objects::ReplyId;

use crate::models::ReplyModel;

/// Convert ReplyModel to Reply entity
impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: ReplyId::new(model.id),
            phone: model.phone,
            message: model.message,
            received_at: model.received_at,
        }
    }
}

/// Values bound when inserting a reply
pub struct ReplyInsert<'a> {
    pub phone: Option<&'a str>,
    pub message: Option<&'a str>,
}

impl<'a> ReplyInsert<'a> {
    pub fn new(reply: &'a NewReply) -> Self {
        Self {
            phone: reply.phone.as_deref(),
            message: reply.message.as_deref(),
        }
    }
}
