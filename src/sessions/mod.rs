mod dto;
pub mod handlers;
pub mod profile;
mod registry;
pub mod transcript;

pub use registry::{Session, SessionHandle, SessionRegistry};

use axum::http::StatusCode;
use axum::Router;
use uuid::Uuid;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    handlers::routes()
}

/// Resolve a session id against the registry; every per-session handler
/// starts here.
pub(crate) async fn lookup(
    state: &AppState,
    id: Uuid,
) -> Result<SessionHandle, (StatusCode, String)> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("session {id} not found")))
}
