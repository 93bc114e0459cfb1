use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// One persisted generation result. Never mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic: String,
    pub niche: String,
    pub style: String,
    pub platform: String,
    pub result: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewContent {
    pub user_id: Uuid,
    pub topic: String,
    pub niche: String,
    pub style: String,
    pub platform: String,
    pub result: String,
}
