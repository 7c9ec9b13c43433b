//! Value objects - immutable types that represent domain concepts

mod delivery_status;
mod duration_type;
mod ids;

pub use delivery_status::DeliveryStatus;
pub use duration_type::DurationType;
pub use ids::{CampaignId, IdParseError, MessageLogId, ReplyId};
