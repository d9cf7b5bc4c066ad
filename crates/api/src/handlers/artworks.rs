//! JSON handlers for the `/artworks` resource.
//!
//! Unlike the page handlers these report store failures to the caller
//! instead of degrading to empty results.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use galleria_core::error::CoreError;
use galleria_core::slug::find_by_slug;
use galleria_core::validation::ArtworkDraft;

use crate::actions;
use crate::error::{AppError, AppResult};
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/artworks
///
/// Active artworks in insertion order; `?include_inactive=true` lists all.
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let artworks = state
        .gallery
        .store()
        .list_artworks(params.include_inactive)
        .await?;
    Ok(Json(DataResponse { data: artworks }))
}

/// GET /api/v1/artworks/{id}
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = actions::parse_artwork_id(&id)?;
    let artwork = state
        .gallery
        .store()
        .find_artwork(id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Artwork",
                id: id.to_string(),
            })
        })?;
    Ok(Json(DataResponse { data: artwork }))
}

/// GET /api/v1/artworks/slug/{slug}
///
/// Inactive artworks are only matched with `?include_inactive=true`.
pub async fn get_artwork_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let artworks = state
        .gallery
        .store()
        .list_artworks(params.include_inactive)
        .await?;
    let artwork = find_by_slug(&artworks, &slug).cloned().ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id: slug.clone(),
        })
    })?;
    Ok(Json(DataResponse { data: artwork }))
}

/// POST /api/v1/artworks
///
/// Validation failures return 400 with per-field messages.
pub async fn create_artwork(
    State(state): State<AppState>,
    Json(draft): Json<ArtworkDraft>,
) -> AppResult<impl IntoResponse> {
    let artwork = actions::create_artwork(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: artwork })))
}

/// POST /api/v1/artworks/{id}/toggle
pub async fn toggle_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let artwork = actions::toggle_artwork_visibility(&state, &id).await?;
    Ok(Json(DataResponse { data: artwork }))
}

/// DELETE /api/v1/artworks/{id}
pub async fn delete_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    actions::delete_artwork(&state, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
