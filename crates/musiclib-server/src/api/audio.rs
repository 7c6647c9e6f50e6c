use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{AppPath, Result};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioUploadResponse {
    pub message: String,
    pub audio_url: String,
}

/// POST /api/songs/:id/audio
///
/// No file is stored: the body is never read and the song is pointed at
/// its placeholder URL, so any payload (multipart or not) is accepted.
pub async fn upload_audio(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<AudioUploadResponse>> {
    let audio_url = state.catalog.attach_audio(id).await?;
    tracing::info!(song_id = id, %audio_url, "audio attached");

    Ok(Json(AudioUploadResponse {
        message: "Audio file uploaded successfully".to_string(),
        audio_url,
    }))
}
