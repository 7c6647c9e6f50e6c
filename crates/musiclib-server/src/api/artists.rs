use axum::{extract::State, http::StatusCode, Json};
use musiclib_catalog::entities::{Artist, ArtistFilter, ArtistUpdate, NewArtist};
use musiclib_catalog::ResourceKind;
use serde::Serialize;
use std::sync::Arc;

use super::MessageResponse;
use crate::error::{AppJson, AppPath, AppQuery, Result};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ArtistListResponse {
    pub artists: Vec<Artist>,
}

/// GET /api/artists
pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    AppQuery(filter): AppQuery<ArtistFilter>,
) -> Json<ArtistListResponse> {
    let artists = state.catalog.list_artists(&filter).await;
    tracing::debug!(genre = ?filter.genre, count = artists.len(), "listed artists");
    Json(ArtistListResponse { artists })
}

/// GET /api/artists/:id
pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<Artist>> {
    Ok(Json(state.catalog.artist(id).await?))
}

/// POST /api/artists
pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<NewArtist>,
) -> Result<(StatusCode, Json<Artist>)> {
    let artist = state.catalog.create_artist(body).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "artist created");
    Ok((StatusCode::CREATED, Json(artist)))
}

/// PUT /api/artists/:id
pub async fn update_artist(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
    AppJson(body): AppJson<ArtistUpdate>,
) -> Result<Json<Artist>> {
    let artist = state.catalog.update_artist(id, body).await?;
    tracing::info!(artist_id = id, "artist updated");
    Ok(Json(artist))
}

/// DELETE /api/artists/:id
///
/// Albums by the artist are kept
pub async fn delete_artist(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<MessageResponse>> {
    let removed = state.catalog.delete_artist(id).await?;
    tracing::info!(artist_id = id, name = %removed.name, "artist deleted");
    Ok(Json(MessageResponse::deleted(ResourceKind::Artist)))
}
