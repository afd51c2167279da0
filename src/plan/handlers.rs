use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use super::dto::PlanResponse;
use crate::model::ModelError;
use crate::state::AppState;
use crate::{prompts, sessions};

pub fn routes() -> Router<AppState> {
    Router::new().route("/sessions/:id/plan", post(create_plan))
}

/// Generates the 7-day plan from the current profile. Holds the session lock
/// across the model call so no other action for this session interleaves.
#[instrument(skip(state))]
pub async fn create_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlanResponse>, (StatusCode, String)> {
    let handle = sessions::lookup(&state, id).await?;
    let session = handle.lock().await;

    let prompt = prompts::meal_plan_prompt(&session.profile);
    match state.model.generate(&prompt, None).await {
        Ok(plan) => Ok(Json(PlanResponse { plan })),
        Err(e) => {
            warn!(%id, error = %e, "meal plan generation failed");
            Err(bad_gateway(e))
        }
    }
}

fn bad_gateway(e: ModelError) -> (StatusCode, String) {
    (StatusCode::BAD_GATEWAY, e.to_string())
}
