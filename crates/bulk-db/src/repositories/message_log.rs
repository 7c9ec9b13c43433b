//! PostgreSQL implementation of MessageLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bulk_core::entities::{CampaignStats, MessageLog, NewMessageLog};
use bulk_core::traits::{MessageLogRepository, RepoResult};
use bulk_core::value_objects::{CampaignId, DeliveryStatus};

use crate::mappers::MessageLogInsert;
use crate::models::{CampaignStatsModel, MessageLogModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageLogRepository
#[derive(Clone)]
pub struct PgMessageLogRepository {
    pool: PgPool,
}

impl PgMessageLogRepository {
    /// Create a new PgMessageLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageLogRepository for PgMessageLogRepository {
    #[instrument(skip(self, log), fields(campaign_id = ?log.campaign_id, status = %log.status))]
    async fn create(&self, log: &NewMessageLog) -> RepoResult<MessageLog> {
        let insert = MessageLogInsert::new(log);

        let model = sqlx::query_as::<_, MessageLogModel>(
            r#"
            INSERT INTO message_logs
                (campaign_id, provider_message_id, recipient, status, error_code, error_message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, campaign_id, provider_message_id, recipient, status,
                      error_code, error_message, created_at, updated_at
            "#,
        )
        .bind(insert.campaign_id)
        .bind(insert.provider_message_id)
        .bind(insert.recipient)
        .bind(insert.status)
        .bind(insert.error_code)
        .bind(insert.error_message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(MessageLog::from(model))
    }

    #[instrument(skip(self))]
    async fn update_status_by_provider_id(
        &self,
        provider_message_id: &str,
        status: &DeliveryStatus,
        error_code: Option<&str>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE message_logs
            SET status = $2,
                error_code = COALESCE($3, error_code),
                updated_at = NOW()
            WHERE provider_message_id = $1
              AND ($4 OR status <> ALL($5))
            "#,
        )
        .bind(provider_message_id)
        .bind(status.as_str())
        .bind(error_code)
        .bind(status.is_terminal())
        .bind(DeliveryStatus::TERMINAL_VALUES.map(String::from).to_vec())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn stats_for_campaign(&self, campaign_id: CampaignId) -> RepoResult<CampaignStats> {
        let model = sqlx::query_as::<_, CampaignStatsModel>(
            r#"
            SELECT
                COUNT(*)                                       AS total_sent,
                COUNT(*) FILTER (WHERE status = 'delivered')   AS delivered,
                COUNT(*) FILTER (WHERE status = 'failed')      AS failed
            FROM message_logs
            WHERE campaign_id = $1
            "#,
        )
        .bind(campaign_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(CampaignStats::from(model))
    }
}
