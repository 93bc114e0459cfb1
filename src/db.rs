use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

/// Postgres-backed implementation of the user and content stores.
#[derive(Clone)]
pub struct PgStore {
    pub(crate) db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    info!("connecting to database");
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("connect to database")?;
    info!("database pool established");
    Ok(db)
}
