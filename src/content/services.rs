use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use super::{
    dto::{GenerateReelRequest, GenerateReelResponse},
    prompts::{build_prompt, Platform},
    quota,
    repo_types::NewContent,
};
use crate::{errors::AppError, generation::GenerationError, state::AppState};

/// Request fields after trimming and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelRequest {
    pub topic: String,
    pub niche: String,
    pub style: String,
    pub platform: Platform,
}

fn trimmed(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

pub fn validate(req: GenerateReelRequest) -> Result<ReelRequest, AppError> {
    let platform = trimmed(req.platform).to_lowercase();
    if platform.is_empty() {
        return Err(AppError::Validation("Platform is required".into()));
    }
    let platform = Platform::parse(&platform)
        .ok_or_else(|| AppError::Validation("Invalid platform selected".into()))?;

    let (topic, niche, style) = (trimmed(req.topic), trimmed(req.niche), trimmed(req.style));
    if topic.is_empty() || niche.is_empty() || style.is_empty() {
        return Err(AppError::Validation("All fields are required".into()));
    }

    Ok(ReelRequest {
        topic,
        niche,
        style,
        platform,
    })
}

/// Runs the whole generation flow for one authenticated request: validation,
/// quota gate, prompt, model call, then the atomic save-and-charge.
pub async fn generate_reel(
    state: &AppState,
    user_id: Uuid,
    req: GenerateReelRequest,
) -> Result<GenerateReelResponse, AppError> {
    let req = validate(req)?;

    let mut user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let now = OffsetDateTime::now_utc();
    if quota::reset_due(&user, now) {
        let next = quota::next_reset_after(now)?;
        user = match state.users.reset_usage(user.id, now, next).await? {
            Some(reset) => {
                info!(user_id = %user.id, next_reset = %next, "monthly usage reset");
                reset
            }
            // Another request reset (and maybe charged) first; read the row it left.
            None => state
                .users
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".into()))?,
        };
    }

    let plan = user.effective_plan();
    quota::check(plan, user.usage(), &req.style).map_err(|e| {
        warn!(user_id = %user.id, plan = plan.as_str(), usage = user.usage(), "generation refused");
        e
    })?;

    let prompt = build_prompt(&req.topic, &req.niche, &req.style, req.platform);
    let text = state.generator.generate(&prompt).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(GenerationError::EmptyContent.into());
    }

    let new = NewContent {
        user_id: user.id,
        topic: req.topic,
        niche: req.niche,
        style: req.style,
        platform: req.platform.as_str().to_string(),
        result: text.to_string(),
    };
    let Some((record, usage)) = state
        .content
        .record_generation(new, quota::limit_for(plan))
        .await?
    else {
        warn!(user_id = %user.id, "quota used up by a concurrent request");
        return Err(AppError::Forbidden(quota::LIMIT_REACHED.into()));
    };

    info!(user_id = %user.id, content_id = %record.id, usage, "content generated");
    Ok(GenerateReelResponse {
        result: record.result,
        remaining: quota::remaining(plan, usage),
    })
}
