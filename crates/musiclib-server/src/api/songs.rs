use axum::{extract::State, http::StatusCode, Json};
use musiclib_catalog::entities::{NewSong, Song, SongFilter, SongUpdate};
use musiclib_catalog::ResourceKind;
use serde::Serialize;
use std::sync::Arc;

use super::MessageResponse;
use crate::error::{AppJson, AppPath, AppQuery, Result};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SongListResponse {
    pub songs: Vec<Song>,
}

/// GET /api/songs?albumId=
pub async fn list_songs(
    State(state): State<Arc<AppState>>,
    AppQuery(filter): AppQuery<SongFilter>,
) -> Json<SongListResponse> {
    let songs = state.catalog.list_songs(&filter).await;
    tracing::debug!(album_id = ?filter.album_id, count = songs.len(), "listed songs");
    Json(SongListResponse { songs })
}

/// GET /api/songs/:id
pub async fn get_song(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<Song>> {
    Ok(Json(state.catalog.song(id).await?))
}

/// POST /api/songs
///
/// The new song gets a placeholder audio URL
pub async fn create_song(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<NewSong>,
) -> Result<(StatusCode, Json<Song>)> {
    let song = state.catalog.create_song(body).await?;
    tracing::info!(song_id = song.id, album_id = song.album_id, "song created");
    Ok((StatusCode::CREATED, Json(song)))
}

/// PUT /api/songs/:id
pub async fn update_song(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
    AppJson(body): AppJson<SongUpdate>,
) -> Result<Json<Song>> {
    let song = state.catalog.update_song(id, body).await?;
    tracing::info!(song_id = id, "song updated");
    Ok(Json(song))
}

/// DELETE /api/songs/:id
pub async fn delete_song(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<MessageResponse>> {
    state.catalog.delete_song(id).await?;
    tracing::info!(song_id = id, "song deleted");
    Ok(Json(MessageResponse::deleted(ResourceKind::Song)))
}
