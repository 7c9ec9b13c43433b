//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bulk_core::entities::{NewReply, Reply};
use bulk_core::traits::{RepoResult, ReplyRepository};

use crate::mappers::ReplyInsert;
use crate::models::ReplyModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self, reply))]
    async fn create(&self, reply: &NewReply) -> RepoResult<Reply> {
        let insert = ReplyInsert::new(reply);

        let model = sqlx::query_as::<_, ReplyModel>(
            r#"
            INSERT INTO replies (phone, message)
            VALUES ($1, $2)
            RETURNING id, phone, message, received_at
            "#,
        )
        .bind(insert.phone)
        .bind(insert.message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Reply::from(model))
    }

    #[instrument(skip(self))]
    async fn list_recent(&self) -> RepoResult<Vec<Reply>> {
        // id breaks ties between replies stamped within the same microsecond
        let results = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, phone, message, received_at
            FROM replies
            ORDER BY received_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reply::from).collect())
    }
}
