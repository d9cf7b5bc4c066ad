//! Static JSON fixtures from early development.
//!
//! A fixture file is a JSON array of artwork drafts (name, year,
//! description, source, artist, images). Records without `is_active` are
//! treated as active.

use std::path::Path;

use galleria_core::validation::ArtworkDraft;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a fixture document.
pub fn parse_fixtures(json: &str) -> Result<Vec<ArtworkDraft>, FixtureError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a fixture file.
pub fn load_fixtures(path: &Path) -> Result<Vec<ArtworkDraft>, FixtureError> {
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let drafts = parse_fixtures(&json)?;
    tracing::debug!(path = %path.display(), count = drafts.len(), "Loaded fixtures");
    Ok(drafts)
}
