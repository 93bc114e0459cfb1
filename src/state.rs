use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::repo::UserStore;
use crate::config::AppConfig;
use crate::content::repo::ContentStore;
use crate::db::{create_pool, PgStore};
use crate::generation::{ContentGenerator, GeminiClient};

/// Process-scoped handles, built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub content: Arc<dyn ContentStore>,
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = create_pool(&config.database_url).await?;

        let generator = Arc::new(GeminiClient::new(&config.gemini)?) as Arc<dyn ContentGenerator>;
        tracing::info!(model = %config.gemini.model, "generation client initialized");

        let store = PgStore::new(db.clone());
        Ok(Self::from_parts(
            db,
            config,
            Arc::new(store.clone()),
            Arc::new(store),
            generator,
        ))
    }

    pub fn from_parts(
        db: PgPool,
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        content: Arc<dyn ContentStore>,
        generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        Self {
            db,
            config,
            users,
            content,
            generator,
        }
    }

    /// Closes the pool; in-flight queries finish first.
    pub async fn shutdown(&self) {
        self.db.close().await;
        tracing::info!("database pool closed");
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        crate::test_support::TestApp::new().state
    }
}
