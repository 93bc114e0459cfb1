mod dto;
pub mod handlers;
pub mod prompts;
pub mod quota;
pub mod repo;
pub mod repo_types;
mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::content_routes())
}
