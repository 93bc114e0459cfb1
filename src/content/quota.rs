//! Plan-based access rules for content generation.

use serde::{Serialize, Serializer};
use time::{Date, Month, OffsetDateTime};

use crate::auth::repo_types::{Plan, User};
use crate::errors::AppError;

/// Generations per month on the free plan.
pub const FREE_LIMIT: i32 = 5;

pub const LIMIT_REACHED: &str = "Free limit reached. Upgrade plan.";
pub const PRO_ONLY_STYLE: &str = "Aggressive mode is only available for Pro users.";

pub fn is_aggressive(style: &str) -> bool {
    style.to_lowercase().contains("aggressive")
}

/// Counter ceiling for `plan`; `None` is unlimited.
pub fn limit_for(plan: Plan) -> Option<i32> {
    match plan {
        Plan::Free => Some(FREE_LIMIT),
        Plan::Pro => None,
    }
}

/// Reject a request the plan does not allow. The usage check runs first, so a
/// free user at the limit always sees the limit message.
pub fn check(plan: Plan, usage: i32, style: &str) -> Result<(), AppError> {
    if let Some(limit) = limit_for(plan) {
        if usage >= limit {
            return Err(AppError::Forbidden(LIMIT_REACHED.into()));
        }
    }
    if plan != Plan::Pro && is_aggressive(style) {
        return Err(AppError::Forbidden(PRO_ONLY_STYLE.into()));
    }
    Ok(())
}

/// Generations left after a successful request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Count(i32),
    Unlimited,
}

impl Serialize for Remaining {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Remaining::Count(n) => serializer.serialize_i32(*n),
            Remaining::Unlimited => serializer.serialize_str("Unlimited"),
        }
    }
}

pub fn remaining(plan: Plan, usage: i32) -> Remaining {
    match limit_for(plan) {
        Some(limit) => Remaining::Count((limit - usage).max(0)),
        None => Remaining::Unlimited,
    }
}

/// True once the stored reset date has passed. Users without one never reset.
pub fn reset_due(user: &User, now: OffsetDateTime) -> bool {
    matches!(user.usage_reset_date, Some(at) if at <= now)
}

/// Midnight UTC on the first day of the month after `now`.
pub fn next_reset_after(now: OffsetDateTime) -> anyhow::Result<OffsetDateTime> {
    let now = now.to_offset(time::UtcOffset::UTC);
    let (year, month) = match now.month() {
        Month::December => (now.year() + 1, Month::January),
        m => (now.year(), m.next()),
    };
    let date = Date::from_calendar_date(year, month, 1)?;
    Ok(date.midnight().assume_utc())
}
