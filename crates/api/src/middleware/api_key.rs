//! Public API key check for the JSON API.
//!
//! The key is a publishable key, not a credential: it keeps anonymous
//! scrapers off the API but does not authenticate users. When no key is
//! configured every request passes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use galleria_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the public API key.
pub const API_KEY_HEADER: &str = "apikey";

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.config.public_api_key.as_deref() {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        match provided {
            Some(key) if key == expected => {}
            Some(_) => {
                return Err(AppError::Core(CoreError::Unauthorized(
                    "Invalid API key".into(),
                )))
            }
            None => {
                return Err(AppError::Core(CoreError::Unauthorized(format!(
                    "Missing {API_KEY_HEADER} header"
                ))))
            }
        }
    }

    Ok(next.run(request).await)
}
