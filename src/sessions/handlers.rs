use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{ProfileView, SessionCreated};
use crate::sessions::profile::Profile;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route(
            "/sessions/:id/profile",
            get(get_profile).put(update_profile),
        )
}

#[instrument(skip(state))]
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionCreated>) {
    let handle = state.sessions.create().await;
    let session = handle.lock().await;
    info!(id = %session.id, "session created");
    (
        StatusCode::CREATED,
        Json(SessionCreated {
            id: session.id,
            created_at: session.created_at,
            profile: session.profile.clone(),
            bmi: session.profile.bmi(),
        }),
    )
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileView>, (StatusCode, String)> {
    let handle = super::lookup(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(ProfileView {
        profile: session.profile.clone(),
        bmi: session.profile.bmi(),
    }))
}

/// Wholesale, validated replacement: an out-of-range candidate never touches
/// the stored profile.
#[instrument(skip(state, candidate))]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(candidate): Json<Profile>,
) -> Result<Json<ProfileView>, (StatusCode, String)> {
    let handle = super::lookup(&state, id).await?;
    let mut session = handle.lock().await;

    if let Err(e) = candidate.validate() {
        warn!(%id, error = %e, "profile update rejected");
        return Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string()));
    }

    session.profile = candidate;
    info!(%id, "profile updated");
    Ok(Json(ProfileView {
        profile: session.profile.clone(),
        bmi: session.profile.bmi(),
    }))
}
