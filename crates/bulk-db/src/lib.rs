//! # bulk-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `bulk-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The table layout lives in `schema.sql` next to this crate's manifest and is
//! exposed as [`SCHEMA`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bulk_db::pool::{create_pool, DatabaseConfig};
//! use bulk_db::repositories::PgCampaignRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(std::env::var("DATABASE_URL")?, 10, 1);
//!     let pool = create_pool(&config).await?;
//!     let campaign_repo = PgCampaignRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

/// DDL for the `campaigns`, `replies` and `message_logs` tables
pub const SCHEMA: &str = include_str!("../schema.sql");

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgCampaignRepository, PgHealthCheck, PgMessageLogRepository, PgReplyRepository,
};
