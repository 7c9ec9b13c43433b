//! Database models - SQLx-compatible structs for PostgreSQL tables

mod campaign;
mod message_log;
mod reply;

pub use campaign::CampaignModel;
pub use message_log::{CampaignStatsModel, MessageLogModel};
pub use reply::ReplyModel;
