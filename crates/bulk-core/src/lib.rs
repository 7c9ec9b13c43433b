//! # bulk-core
//!
//! Domain layer containing entities, value objects, and the ports (repository and
//! messaging gateway traits) the rest of the workspace implements.
//! This crate has zero dependencies on infrastructure (database, web framework, HTTP client).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Campaign, CampaignStats, MessageLog, NewCampaign, NewMessageLog, NewReply, Reply};
pub use error::DomainError;
pub use traits::{
    CampaignRepository, HealthCheck, MessageLogRepository, MessagingGateway, OutboundMessage,
    RepoResult, ReplyRepository, SendReceipt,
};
pub use value_objects::{
    CampaignId, DeliveryStatus, DurationType, IdParseError, MessageLogId, ReplyId,
};
