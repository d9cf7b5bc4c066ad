use axum::http::header;
use axum::response::IntoResponse;

use crate::views::STYLE_CSS;

/// GET /static/style.css
pub async fn stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLE_CSS,
    )
}
