pub mod artworks;
pub mod dashboard;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /artworks                      list, create
/// /artworks/{id}                 get, delete
/// /artworks/{id}/toggle          toggle visibility (POST)
/// /artworks/slug/{slug}          get by derived slug
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/artworks", artworks::router())
}

/// HTML pages for visitors and the dashboard, plus embedded assets.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(dashboard::router())
}
