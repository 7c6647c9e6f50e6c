use axum::{extract::State, http::StatusCode, Json};
use musiclib_catalog::entities::{Album, AlbumFilter, AlbumUpdate, NewAlbum};
use musiclib_catalog::ResourceKind;
use serde::Serialize;
use std::sync::Arc;

use super::MessageResponse;
use crate::error::{AppJson, AppPath, AppQuery, Result};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AlbumListResponse {
    pub albums: Vec<Album>,
}

/// GET /api/albums?artistId=&year=
pub async fn list_albums(
    State(state): State<Arc<AppState>>,
    AppQuery(filter): AppQuery<AlbumFilter>,
) -> Json<AlbumListResponse> {
    let albums = state.catalog.list_albums(&filter).await;
    tracing::debug!(
        artist_id = ?filter.artist_id,
        year = ?filter.year,
        count = albums.len(),
        "listed albums"
    );
    Json(AlbumListResponse { albums })
}

/// GET /api/albums/:id
pub async fn get_album(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<Album>> {
    Ok(Json(state.catalog.album(id).await?))
}

/// POST /api/albums
pub async fn create_album(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<NewAlbum>,
) -> Result<(StatusCode, Json<Album>)> {
    let album = state.catalog.create_album(body).await?;
    tracing::info!(album_id = album.id, artist_id = album.artist_id, "album created");
    Ok((StatusCode::CREATED, Json(album)))
}

/// PUT /api/albums/:id
pub async fn update_album(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
    AppJson(body): AppJson<AlbumUpdate>,
) -> Result<Json<Album>> {
    let album = state.catalog.update_album(id, body).await?;
    tracing::info!(album_id = id, "album updated");
    Ok(Json(album))
}

/// DELETE /api/albums/:id
///
/// Songs on the album are kept
pub async fn delete_album(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<MessageResponse>> {
    state.catalog.delete_album(id).await?;
    tracing::info!(album_id = id, "album deleted");
    Ok(Json(MessageResponse::deleted(ResourceKind::Album)))
}
