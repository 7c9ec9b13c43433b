//! Entity to model mappers
//!
//! This module provides conversions between domain entities (bulk-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod campaign;
mod message_log;
mod reply;

pub use campaign::CampaignInsert;
pub use message_log::MessageLogInsert;
pub use reply::ReplyInsert;
