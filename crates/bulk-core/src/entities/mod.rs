//! Domain entities - core business objects

mod campaign;
mod message_log;
mod reply;

pub use campaign::{Campaign, NewCampaign};
pub use message_log::{CampaignStats, MessageLog, NewMessageLog};
pub use reply::{NewReply, Reply};
