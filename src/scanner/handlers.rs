use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use image::ImageFormat;
use tracing::{instrument, warn};
use uuid::Uuid;

use super::dto::AnalysisResponse;
use crate::model::{ImagePart, ModelError};
use crate::state::AppState;
use crate::{prompts, sessions};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/:id/scan", post(analyze_image))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024))
}

/// POST /sessions/:id/scan (multipart, field `image`). The upload is sniffed
/// for a known image format; decoding beyond the header is left to the model.
#[instrument(skip(state, mp))]
pub async fn analyze_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut mp: Multipart,
) -> Result<Json<AnalysisResponse>, (StatusCode, String)> {
    let mut upload: Option<Bytes> = None;
    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("image") {
            let data = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("failed to read image: {e}")))?;
            if data.len() > MAX_IMAGE_SIZE {
                return Err((
                    StatusCode::BAD_REQUEST,
                    format!("image too large, max {} bytes", MAX_IMAGE_SIZE),
                ));
            }
            upload = Some(data);
        }
    }
    let data = upload.ok_or((StatusCode::BAD_REQUEST, "image field is required".into()))?;

    let mime_type = sniff_mime(&data)
        .ok_or((StatusCode::BAD_REQUEST, "unsupported image format".into()))?;

    let handle = sessions::lookup(&state, id).await?;
    let _session = handle.lock().await;

    let image = ImagePart { mime_type, data };
    match state
        .model
        .generate(prompts::food_analysis_prompt(), Some(image))
        .await
    {
        Ok(analysis) => Ok(Json(AnalysisResponse { analysis })),
        Err(e) => {
            warn!(%id, error = %e, "food analysis failed");
            Err(bad_gateway(e))
        }
    }
}

fn sniff_mime(data: &[u8]) -> Option<&'static str> {
    match image::guess_format(data).ok()? {
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Png => Some("image/png"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

fn bad_gateway(e: ModelError) -> (StatusCode, String) {
    (StatusCode::BAD_GATEWAY, e.to_string())
}
