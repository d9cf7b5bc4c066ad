//! The artwork view model.
//!
//! [`Artwork`] is what pages, the JSON API and the client work with. The
//! storage row lives in `galleria-db` and is mapped into this shape on every
//! read, which is also where the slug is derived.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::slug::slugify;
use crate::types::{ArtworkId, Timestamp};

// ---------------------------------------------------------------------------
// Nested attributes
// ---------------------------------------------------------------------------

/// The artist who made an artwork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ArtistInfo {
    #[validate(length(min = 1, code = "artist_name", message = "Artist name is required"))]
    pub name: String,
    /// Portrait image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(code = "artist_image", message = "Artist image URL must be a valid URL"))]
    pub image: Option<String>,
}

/// Responsive variants of the detail-page illustration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HeroImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(code = "hero_large", message = "Hero large image URL must be a valid URL"))]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(code = "hero_small", message = "Hero small image URL must be a valid URL"))]
    pub small: Option<String>,
}

/// All image URLs attached to an artwork. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ArtworkImages {
    #[serde(default)]
    #[validate(nested)]
    pub hero: HeroImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(code = "gallery", message = "Gallery image URL must be a valid URL"))]
    pub gallery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(code = "thumbnail", message = "Thumbnail image URL must be a valid URL"))]
    pub thumbnail: Option<String>,
}

impl ArtworkImages {
    /// Image used for grid cards: the gallery image, falling back to the
    /// thumbnail and then the small hero.
    pub fn card_image(&self) -> Option<&str> {
        self.gallery
            .as_deref()
            .or(self.thumbnail.as_deref())
            .or(self.hero.small.as_deref())
    }

    /// Image used for the detail view on wide screens.
    pub fn hero_large(&self) -> Option<&str> {
        self.hero.large.as_deref().or(self.hero.small.as_deref())
    }

    /// Image used for the detail view on narrow screens.
    pub fn hero_small(&self) -> Option<&str> {
        self.hero.small.as_deref().or(self.hero.large.as_deref())
    }

    /// `true` when no image URL is set at all.
    pub fn is_empty(&self) -> bool {
        self.hero.large.is_none()
            && self.hero.small.is_none()
            && self.gallery.is_none()
            && self.thumbnail.is_none()
    }
}

// ---------------------------------------------------------------------------
// Artwork
// ---------------------------------------------------------------------------

/// A gallery artwork as presented to visitors and the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    /// Derived from `name`; never stored.
    pub slug: String,
    pub name: String,
    pub year: i32,
    pub description: String,
    pub source: String,
    pub artist: ArtistInfo,
    pub images: ArtworkImages,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Artwork {
    /// Build an artwork, deriving its slug from `name`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ArtworkId,
        name: String,
        year: i32,
        description: String,
        source: String,
        artist: ArtistInfo,
        images: ArtworkImages,
        is_active: bool,
        created_at: Timestamp,
    ) -> Self {
        let slug = slugify(&name);
        Self {
            id,
            slug,
            name,
            year,
            description,
            source,
            artist,
            images,
            is_active,
            created_at,
        }
    }

    /// Public detail route for this artwork.
    pub fn href(&self) -> String {
        gallery_href(&self.slug)
    }
}

/// Public detail route for a slug.
pub fn gallery_href(slug: &str) -> String {
    format!("/gallery/{slug}")
}
