use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::{NewUser, User};
use crate::db::PgStore;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, plan, usage_count, usage_reset_date, created_at, updated_at";

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Returns `None` when the email is already taken.
    async fn create(&self, new: NewUser) -> anyhow::Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    /// Zero the usage counter and move the reset date to `next_reset`, but only
    /// if the stored reset date is at or before `now`. Returns the updated row,
    /// or `None` when no reset was due.
    async fn reset_usage(
        &self,
        id: Uuid,
        now: OffsetDateTime,
        next_reset: OffsetDateTime,
    ) -> anyhow::Result<Option<User>>;
}

#[async_trait]
impl UserStore for PgStore {
    async fn create(&self, new: NewUser) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (name, email, password_hash, plan, usage_count, usage_reset_date)
            VALUES ($1, $2, $3, 'free', 0, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(new.usage_reset_date)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn reset_usage(
        &self,
        id: Uuid,
        now: OffsetDateTime,
        next_reset: OffsetDateTime,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
               SET usage_count = 0, usage_reset_date = $3, updated_at = now()
             WHERE id = $1 AND usage_reset_date IS NOT NULL AND usage_reset_date <= $2
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(now)
        .bind(next_reset)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
