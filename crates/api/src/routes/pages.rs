use axum::routing::get;
use axum::Router;

use crate::handlers::{assets, pages};
use crate::state::AppState;

/// Public pages.
///
/// ```text
/// GET /                     -> home
/// GET /gallery/{slug}       -> artwork_detail
/// GET /slideshow            -> start_slideshow
/// GET /static/style.css     -> stylesheet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/gallery/{slug}", get(pages::artwork_detail))
        .route("/slideshow", get(pages::start_slideshow))
        .route("/static/style.css", get(assets::stylesheet))
}
