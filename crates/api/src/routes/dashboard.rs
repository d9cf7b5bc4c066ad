use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard pages and form targets.
///
/// ```text
/// GET  /dashboard                        -> dashboard
/// POST /dashboard/artworks               -> create_artwork
/// POST /dashboard/artworks/{id}/toggle   -> toggle_artwork
/// POST /dashboard/artworks/{id}/delete   -> delete_artwork
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/artworks", post(dashboard::create_artwork))
        .route(
            "/dashboard/artworks/{id}/toggle",
            post(dashboard::toggle_artwork),
        )
        .route(
            "/dashboard/artworks/{id}/delete",
            post(dashboard::delete_artwork),
        )
}
