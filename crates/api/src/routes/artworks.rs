//! Route definitions for the `/artworks` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artworks;
use crate::state::AppState;

/// Routes mounted at `/artworks`.
///
/// ```text
/// GET    /                 -> list_artworks
/// POST   /                 -> create_artwork
/// GET    /{id}             -> get_artwork
/// DELETE /{id}             -> delete_artwork
/// POST   /{id}/toggle      -> toggle_artwork
/// GET    /slug/{slug}      -> get_artwork_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(artworks::list_artworks).post(artworks::create_artwork),
        )
        .route(
            "/{id}",
            get(artworks::get_artwork).delete(artworks::delete_artwork),
        )
        .route("/{id}/toggle", post(artworks::toggle_artwork))
        .route("/slug/{slug}", get(artworks::get_artwork_by_slug))
}
