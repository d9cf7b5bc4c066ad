//! Dashboard mutation actions.
//!
//! Each action is a single store round trip followed by revalidation of the
//! pages that display artworks, so the next render reflects the change.
//! Failures are logged here and carried back to the caller, which turns them
//! into an inline message or a JSON error.

use galleria_core::artwork::Artwork;
use galleria_core::types::ArtworkId;
use galleria_core::validation::{current_year, ArtworkDraft, FormErrors};
use galleria_db::StoreError;
use serde::Serialize;

use crate::state::AppState;

/// Pages that list or display artworks.
pub const REVALIDATE_PATHS: [&str; 3] = ["/dashboard", "/gallery", "/"];

pub const MSG_TOGGLE_FAILED: &str = "Failed to toggle artwork visibility";
pub const MSG_DELETE_FAILED: &str = "Failed to delete artwork. Please try again.";
pub const MSG_CREATE_FAILED: &str = "Failed to create artwork. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Artwork ID is required")]
    MissingId,

    #[error("Invalid artwork ID: {0}")]
    InvalidId(String),

    #[error("Artwork {0} not found")]
    NotFound(ArtworkId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("{0}")]
    Invalid(FormErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of the create action in the shape the add-artwork form consumes.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_id: Option<ArtworkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "FormErrors::is_empty")]
    pub field_errors: FormErrors,
}

impl From<&Result<Artwork, CreateError>> for CreateOutcome {
    fn from(result: &Result<Artwork, CreateError>) -> Self {
        match result {
            Ok(artwork) => Self {
                success: true,
                artwork_id: Some(artwork.id),
                error: None,
                field_errors: FormErrors::default(),
            },
            Err(CreateError::Invalid(errors)) => Self {
                success: false,
                artwork_id: None,
                error: errors.first_message().map(str::to_owned),
                field_errors: errors.clone(),
            },
            Err(CreateError::Store(_)) => Self {
                success: false,
                artwork_id: None,
                error: Some(MSG_CREATE_FAILED.to_string()),
                field_errors: FormErrors::default(),
            },
        }
    }
}

/// Parse a raw id from a path or form field.
pub fn parse_artwork_id(raw: &str) -> Result<ArtworkId, ActionError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ActionError::MissingId);
    }
    raw.parse()
        .map_err(|_| ActionError::InvalidId(raw.to_string()))
}

async fn revalidate(state: &AppState) {
    for path in REVALIDATE_PATHS {
        state.pages.revalidate_path(path).await;
    }
}

/// Flip an artwork's visibility.
pub async fn toggle_artwork_visibility(
    state: &AppState,
    raw_id: &str,
) -> Result<Artwork, ActionError> {
    let id = parse_artwork_id(raw_id)?;

    let artwork = match state.gallery.store().toggle_visibility(id).await {
        Ok(Some(artwork)) => artwork,
        Ok(None) => return Err(ActionError::NotFound(id)),
        Err(e) => {
            tracing::error!(artwork_id = %id, error = %e, "Error toggling artwork visibility");
            return Err(e.into());
        }
    };

    revalidate(state).await;
    tracing::info!(
        artwork_id = %id,
        is_active = artwork.is_active,
        "Artwork visibility toggled",
    );
    Ok(artwork)
}

/// Delete an artwork. Image URLs it references are left untouched.
pub async fn delete_artwork(state: &AppState, raw_id: &str) -> Result<(), ActionError> {
    let id = parse_artwork_id(raw_id)?;

    match state.gallery.store().delete_artwork(id).await {
        Ok(true) => {}
        Ok(false) => return Err(ActionError::NotFound(id)),
        Err(e) => {
            tracing::error!(artwork_id = %id, error = %e, "Error deleting artwork");
            return Err(e.into());
        }
    }

    revalidate(state).await;
    tracing::info!(artwork_id = %id, "Artwork deleted");
    Ok(())
}

/// Validate and insert a new artwork.
pub async fn create_artwork(state: &AppState, draft: ArtworkDraft) -> Result<Artwork, CreateError> {
    let draft = draft.validated(current_year()).map_err(CreateError::Invalid)?;

    let artwork = state
        .gallery
        .store()
        .insert_artwork(&draft)
        .await
        .map_err(|e| {
            tracing::error!(name = %draft.name, error = %e, "Error creating artwork");
            CreateError::Store(e)
        })?;

    revalidate(state).await;
    tracing::info!(artwork_id = %artwork.id, slug = %artwork.slug, "Artwork created");
    Ok(artwork)
}
