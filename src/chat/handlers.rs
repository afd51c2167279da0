use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use super::dto::{ChatMessageRequest, ChatMessageResponse, TranscriptResponse};
use crate::sessions::transcript::Speaker;
use crate::state::AppState;
use crate::{prompts, sessions};

/// Marker prefix for a coach turn that stands in for a failed model call, so
/// the user turn is never left unresolved in the transcript.
pub const FAILED_TURN_PREFIX: &str = "[error]";

pub fn routes() -> Router<AppState> {
    Router::new().route("/sessions/:id/chat", get(get_transcript).post(send_message))
}

#[instrument(skip(state))]
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, (StatusCode, String)> {
    let handle = sessions::lookup(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(TranscriptResponse {
        turns: session.transcript.all().to_vec(),
    }))
}

/// One chat exchange. The prompt carries the profile plus this message only;
/// earlier turns are not re-sent (see `prompts::chat_prompt`).
#[instrument(skip(state, body))]
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, (StatusCode, String)> {
    let message = body.message.trim().to_string();
    if message.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "message must not be empty".into(),
        ));
    }

    let handle = sessions::lookup(&state, id).await?;
    let mut session = handle.lock().await;

    let prompt = prompts::chat_prompt(&session.profile, &message);
    match state.model.generate(&prompt, None).await {
        Ok(reply) => {
            session.transcript.append(Speaker::User, message);
            session.transcript.append(Speaker::Coach, reply.clone());
            Ok(Json(ChatMessageResponse { reply }))
        }
        Err(e) => {
            warn!(%id, error = %e, "chat exchange failed");
            session.transcript.append(Speaker::User, message);
            session
                .transcript
                .append(Speaker::Coach, format!("{FAILED_TURN_PREFIX} {e}"));
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
