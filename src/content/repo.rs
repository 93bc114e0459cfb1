use anyhow::Context;
use async_trait::async_trait;
use uuid::Uuid;

use crate::content::repo_types::{ContentRecord, NewContent};
use crate::db::PgStore;

const CONTENT_COLUMNS: &str =
    "id, user_id, topic, niche, style, platform, result, created_at, updated_at";

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All records owned by `user_id`, newest first.
    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<ContentRecord>>;

    /// Charge one generation to the owner and persist the record, atomically.
    ///
    /// The counter is incremented only while it is below `limit` (`None` means
    /// unlimited). When the increment does not apply nothing is written and
    /// `None` is returned; otherwise the saved record and the new usage count.
    async fn record_generation(
        &self,
        new: NewContent,
        limit: Option<i32>,
    ) -> anyhow::Result<Option<(ContentRecord, i32)>>;
}

#[async_trait]
impl ContentStore for PgStore {
    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<ContentRecord>> {
        let rows = sqlx::query_as::<_, ContentRecord>(&format!(
            r#"
            SELECT {CONTENT_COLUMNS}
              FROM content_records
             WHERE user_id = $1
             ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .context("list content by user")?;
        Ok(rows)
    }

    async fn record_generation(
        &self,
        new: NewContent,
        limit: Option<i32>,
    ) -> anyhow::Result<Option<(ContentRecord, i32)>> {
        let mut tx = self.db.begin().await.context("begin tx")?;

        let usage: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE users
               SET usage_count = COALESCE(usage_count, 0) + 1, updated_at = now()
             WHERE id = $1
               AND ($2::INTEGER IS NULL OR COALESCE(usage_count, 0) < $2)
            RETURNING usage_count
            "#,
        )
        .bind(new.user_id)
        .bind(limit)
        .fetch_optional(&mut *tx)
        .await
        .context("charge usage")?;

        let Some(usage) = usage else {
            tx.rollback().await.context("rollback tx")?;
            return Ok(None);
        };

        let record = sqlx::query_as::<_, ContentRecord>(&format!(
            r#"
            INSERT INTO content_records (user_id, topic, niche, style, platform, result)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CONTENT_COLUMNS}
            "#
        ))
        .bind(new.user_id)
        .bind(&new.topic)
        .bind(&new.niche)
        .bind(&new.style)
        .bind(&new.platform)
        .bind(&new.result)
        .fetch_one(&mut *tx)
        .await
        .context("insert content record")?;

        tx.commit().await.context("commit tx")?;
        Ok(Some((record, usage)))
    }
}
