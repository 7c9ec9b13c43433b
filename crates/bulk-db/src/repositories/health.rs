//! Storage readiness check

use async_trait::async_trait;
use sqlx::PgPool;

use bulk_core::traits::{HealthCheck, RepoResult};

use super::error::map_db_error;

/// Checks that a pooled connection can run a statement
#[derive(Clone)]
pub struct PgHealthCheck {
    pool: PgPool,
}

impl PgHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PgHealthCheck {
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
