//! PostgreSQL implementation of CampaignRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bulk_core::entities::{Campaign, NewCampaign};
use bulk_core::traits::{CampaignRepository, RepoResult};
use bulk_core::value_objects::CampaignId;

use crate::mappers::CampaignInsert;
use crate::models::CampaignModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CampaignRepository
#[derive(Clone)]
pub struct PgCampaignRepository {
    pool: PgPool,
}

impl PgCampaignRepository {
    /// Create a new PgCampaignRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    #[instrument(skip(self, campaign), fields(user_id = campaign.user_id))]
    async fn create(&self, campaign: &NewCampaign) -> RepoResult<Campaign> {
        let insert = CampaignInsert::new(campaign);

        let model = sqlx::query_as::<_, CampaignModel>(
            r#"
            INSERT INTO campaigns (user_id, message, duration_type)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, message, duration_type, created_at
            "#,
        )
        .bind(insert.user_id)
        .bind(insert.message)
        .bind(insert.duration_type)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Campaign::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CampaignId) -> RepoResult<Option<Campaign>> {
        let result = sqlx::query_as::<_, CampaignModel>(
            r#"
            SELECT id, user_id, message, duration_type, created_at
            FROM campaigns
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Campaign::from))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM campaigns")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }
}
