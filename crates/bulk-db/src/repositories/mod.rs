//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in bulk-core.
//! Each repository handles database operations for one table.

mod campaign;
mod error;
mod health;
mod message_log;
mod reply;

pub use campaign::PgCampaignRepository;
pub use health::PgHealthCheck;
pub use message_log::PgMessageLogRepository;
pub use reply::PgReplyRepository;
