use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::NewUser,
    },
    content::quota::next_reset_after,
    errors::{AppError, AppJson},
    state::AppState,
};

const MIN_PASSWORD_LEN: usize = 6;

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.name = payload.name.trim().to_string();
    payload.email = payload.email.trim().to_lowercase();

    if payload.name.is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        warn!("password too short");
        return Err(AppError::Validation("Password too short".into()));
    }

    if state.users.find_by_email(&payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::Conflict("User already exists".into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let new_user = NewUser {
        name: payload.name,
        email: payload.email,
        password_hash,
        usage_reset_date: Some(next_reset_after(OffsetDateTime::now_utc())?),
    };

    // The insert itself rejects a duplicate that slipped past the lookup above.
    let Some(user) = state.users.create(new_user).await? else {
        warn!("email registered concurrently");
        return Err(AppError::Conflict("User already exists".into()));
    };

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(MessageResponse {
        message: "User Registered Successfully".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.email = payload.email.trim().to_lowercase();

    let Some(user) = state.users.find_by_email(&payload.email).await? else {
        warn!(email = %payload.email, "login unknown email");
        return Err(AppError::BadCredentials("User not found".into()));
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::BadCredentials("Wrong password".into()));
    }

    let token = JwtKeys::from_ref(&state).sign(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse { token }))
}
