//! Legacy fixture API.
//!
//! The read-only `/paintings` endpoints the gallery was first built against,
//! served from a fixture file loaded into a [`MemoryGalleryStore`].

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use galleria_core::artwork::Artwork;
use galleria_core::slug::find_by_slug;
use galleria_db::{GalleryStore, MemoryGalleryStore};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Port the legacy frontend expects the mock API on.
pub const DEFAULT_FIXTURE_PORT: u16 = 3500;

type FixtureState = Arc<MemoryGalleryStore>;

/// Routes (mounted at the root):
///
/// ```text
/// GET /paintings          every fixture record
/// GET /paintings/{slug}   one record by derived slug
/// ```
pub fn fixture_router(store: FixtureState) -> Router {
    Router::new()
        .route("/paintings", get(list_paintings))
        .route("/paintings/{slug}", get(get_painting))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .with_state(store)
}

async fn paintings(store: &FixtureState) -> Result<Vec<Artwork>, StatusCode> {
    store.list_artworks(true).await.map_err(|e| {
        tracing::error!(error = %e, "Fixture store unavailable");
        StatusCode::SERVICE_UNAVAILABLE
    })
}

/// GET /paintings
async fn list_paintings(
    State(store): State<FixtureState>,
) -> Result<Json<Vec<Artwork>>, StatusCode> {
    paintings(&store).await.map(Json)
}

/// GET /paintings/{slug}
async fn get_painting(
    State(store): State<FixtureState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let paintings = paintings(&store).await?;
    match find_by_slug(&paintings, &slug) {
        Some(painting) => Ok(Json(json!(painting)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("No painting with slug {slug}") })),
        )
            .into_response()),
    }
}
