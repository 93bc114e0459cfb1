use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Subscription tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Pro,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
        }
    }
}

/// User row. Never leaves the process as JSON.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,          // Argon2 PHC string
    pub plan: Option<String>,           // NULL on legacy rows
    pub usage_count: Option<i32>,       // NULL on legacy rows
    pub usage_reset_date: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl User {
    /// Stored plan, defaulting to free when unset or unrecognised.
    pub fn effective_plan(&self) -> Plan {
        match self.plan.as_deref() {
            Some("pro") => Plan::Pro,
            _ => Plan::Free,
        }
    }

    pub fn usage(&self) -> i32 {
        self.usage_count.unwrap_or(0)
    }
}

/// Insert payload; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub usage_reset_date: Option<OffsetDateTime>,
}
