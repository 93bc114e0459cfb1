use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    /// No timeout when unset.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub gemini: GeminiConfig,
    pub static_dir: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = require_env("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: require_env("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "reelgen".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "reelgen-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 7),
        };
        let gemini = GeminiConfig {
            api_key: require_env("GEMINI_API_KEY")?,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into()),
            api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into()),
            timeout_secs: std::env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok()),
        };
        let port = std::env::var("APP_PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .context("APP_PORT must be a valid port number")?;

        Ok(Self {
            database_url,
            jwt,
            gemini,
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
        })
    }
}

fn require_env(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("required environment variable '{key}' is not set"))
}
