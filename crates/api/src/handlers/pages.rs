//! Public HTML pages.
//!
//! Rendered pages are stored in the [`PageCache`](crate::page_cache::PageCache)
//! under their route path and served from there until a mutation
//! revalidates them. Pages rendered from a failed store read are served but
//! never cached.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use galleria_core::artwork::gallery_href;

use crate::query::DetailParams;
use crate::state::AppState;
use crate::views::detail::render_detail;
use crate::views::gallery::render_home;
use crate::views::layout::render_not_found;

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    if let Some(html) = state.pages.get("/").await {
        return Html(html);
    }

    let generation = state.pages.generation().await;
    let listing = state.gallery.listing(false).await;
    let html = render_home(&listing.artworks).into_string();
    if !listing.degraded {
        state.pages.insert("/", html.clone(), generation).await;
    }
    Html(html)
}

/// GET /gallery/{slug}
///
/// Only active artworks have a detail page. `?modal=true` adds the image
/// overlay.
pub async fn artwork_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<DetailParams>,
) -> Response {
    let mut key = gallery_href(&slug);
    if params.modal {
        key.push_str("?modal=true");
    }
    if let Some(html) = state.pages.get(&key).await {
        return Html(html).into_response();
    }

    let generation = state.pages.generation().await;
    let Some(ctx) = state.gallery.slide_context(&slug).await else {
        tracing::debug!(%slug, "No active artwork for slug");
        return not_found_page(&format!("No artwork matches \"{slug}\".")).into_response();
    };

    let html = render_detail(&ctx, &state.config.slideshow, params.modal).into_string();
    state.pages.insert(key, html.clone(), generation).await;
    Html(html).into_response()
}

/// GET /slideshow
///
/// Starts the slideshow at the first active artwork, or returns home when
/// there is nothing to show.
pub async fn start_slideshow(State(state): State<AppState>) -> Redirect {
    match state.gallery.first_active_slug().await {
        Some(slug) => Redirect::to(&gallery_href(&slug)),
        None => Redirect::to("/"),
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> (StatusCode, Html<String>) {
    not_found_page("The page you are looking for does not exist.")
}

fn not_found_page(message: &str) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(message).into_string()),
    )
}
