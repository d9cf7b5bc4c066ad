use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use galleria_core::error::CoreError;
use galleria_core::validation::FormErrors;
use galleria_db::StoreError;
use serde_json::json;

use crate::actions::{ActionError, CreateError};

/// Application-level error type for JSON API handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `galleria_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure in the gallery store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Field-level validation failures.
    #[error("Invalid input: {0}")]
    InvalidForm(FormErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ActionError> for AppError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::MissingId | ActionError::InvalidId(_) => {
                AppError::BadRequest(err.to_string())
            }
            ActionError::NotFound(id) => AppError::Core(CoreError::NotFound {
                entity: "Artwork",
                id: id.to_string(),
            }),
            ActionError::Store(e) => AppError::Store(e),
        }
    }
}

impl From<CreateError> for AppError {
    fn from(err: CreateError) -> Self {
        match err {
            CreateError::Invalid(errors) => AppError::InvalidForm(errors),
            CreateError::Store(e) => AppError::Store(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "The gallery store is unavailable".to_string(),
                )
            }

            // --- Field validation carries its own body ---
            AppError::InvalidForm(errors) => {
                let body = json!({
                    "error": errors.first_message().unwrap_or("Invalid input"),
                    "code": "VALIDATION_ERROR",
                    "fields": errors,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Check constraint violations (PostgreSQL `23514`) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23514") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Value violates check constraint: {constraint}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_errors_map_to_statuses() {
        let missing = AppError::from(ActionError::MissingId).into_response();
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let not_found =
            AppError::from(ActionError::NotFound(uuid::Uuid::nil())).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let offline = AppError::from(ActionError::Store(StoreError::Unavailable("x".into())))
            .into_response();
        assert_eq!(offline.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn row_not_found_is_404() {
        let response =
            AppError::Store(StoreError::Database(sqlx::Error::RowNotFound)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_form_is_400() {
        let response = AppError::InvalidForm(FormErrors::general("nope")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
