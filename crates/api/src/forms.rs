//! The dashboard's add-artwork form.
//!
//! Browsers submit flat `application/x-www-form-urlencoded` fields; this
//! module maps them onto the nested [`ArtworkDraft`] and back for
//! re-rendering after a failed submission.

use galleria_core::artwork::{ArtistInfo, ArtworkImages, HeroImages};
use galleria_core::validation::{current_year, ArtworkDraft};
use serde::Deserialize;

/// Raw form fields, kept as strings so the form can be re-rendered verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub artist_image: String,
    #[serde(default)]
    pub hero_large: String,
    #[serde(default)]
    pub hero_small: String,
    #[serde(default)]
    pub gallery: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Checkbox: present (`"on"`) when checked.
    #[serde(default)]
    pub is_active: Option<String>,
}

impl Default for ArtworkForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            year: current_year().to_string(),
            description: String::new(),
            source: String::new(),
            artist_name: String::new(),
            artist_image: String::new(),
            hero_large: String::new(),
            hero_small: String::new(),
            gallery: String::new(),
            thumbnail: String::new(),
            is_active: Some("on".into()),
        }
    }
}

/// Blank inputs are absent.
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ArtworkForm {
    pub fn is_active(&self) -> bool {
        self.is_active.is_some()
    }

    /// Map to the creation payload. An unparseable year becomes `0`, which
    /// fails the year check.
    pub fn to_draft(&self) -> ArtworkDraft {
        ArtworkDraft {
            name: self.name.clone(),
            year: self.year.trim().parse().unwrap_or(0),
            description: self.description.clone(),
            source: optional(&self.source),
            artist: ArtistInfo {
                name: self.artist_name.clone(),
                image: optional(&self.artist_image),
            },
            images: ArtworkImages {
                hero: HeroImages {
                    large: optional(&self.hero_large),
                    small: optional(&self.hero_small),
                },
                gallery: optional(&self.gallery),
                thumbnail: optional(&self.thumbnail),
            },
            is_active: self.is_active(),
        }
    }
}
