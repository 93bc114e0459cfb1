use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{GenerateReelRequest, GenerateReelResponse},
    repo_types::ContentRecord,
    services,
};
use crate::{
    auth::jwt::AuthUser,
    errors::{AppError, AppJson},
    state::AppState,
};

pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/my-content", get(my_content))
        .route("/generate-reel", post(generate_reel))
}

#[instrument(skip(state))]
pub async fn my_content(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ContentRecord>>, AppError> {
    let records = state.content.list_by_user(user_id).await?;
    info!(%user_id, count = records.len(), "listed content");
    Ok(Json(records))
}

#[instrument(skip(state, body))]
pub async fn generate_reel(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(body): AppJson<GenerateReelRequest>,
) -> Result<Json<GenerateReelResponse>, AppError> {
    services::generate_reel(&state, user_id, body).await.map(Json)
}
