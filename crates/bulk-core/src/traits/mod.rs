//! Ports - traits implemented by the infrastructure crates

mod messaging;
mod repositories;

pub use messaging::{MessagingGateway, OutboundMessage, SendReceipt};
pub use repositories::{
    CampaignRepository, HealthCheck, MessageLogRepository, RepoResult, ReplyRepository,
};
