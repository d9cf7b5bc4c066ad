//! Artwork row model for the `galleria` table.
//!
//! `artist` and `images` are JSONB columns. Older rows hold the artist as a
//! JSON-encoded string inside the JSONB value; both shapes are accepted on
//! read.

use galleria_core::artwork::{ArtistInfo, Artwork, ArtworkImages};
use galleria_core::types::{ArtworkId, Timestamp};
use galleria_core::validation::ArtworkDraft;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `galleria` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtworkRow {
    pub id: ArtworkId,
    pub name: String,
    pub year: i32,
    pub description: String,
    pub source: String,
    pub artist: Value,
    pub images: Value,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl ArtworkRow {
    /// Map the storage row to the view model, deriving the slug.
    pub fn into_artwork(self) -> Artwork {
        let artist = decode_artist(self.id, self.artist);
        let images = decode_images(self.id, self.images);
        Artwork::new(
            self.id,
            self.name,
            self.year,
            self.description,
            self.source,
            artist,
            images,
            self.is_active,
            self.created_at,
        )
    }
}

fn decode_artist(id: ArtworkId, value: Value) -> ArtistInfo {
    let decoded = match value {
        Value::String(encoded) => serde_json::from_str::<ArtistInfo>(&encoded),
        other => serde_json::from_value::<ArtistInfo>(other),
    };
    decoded.unwrap_or_else(|e| {
        tracing::warn!(artwork_id = %id, error = %e, "Malformed artist column");
        ArtistInfo::default()
    })
}

fn decode_images(id: ArtworkId, value: Value) -> ArtworkImages {
    if value.is_null() {
        return ArtworkImages::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(artwork_id = %id, error = %e, "Malformed images column");
        ArtworkImages::default()
    })
}

// ---------------------------------------------------------------------------
// DTO (insert payload)
// ---------------------------------------------------------------------------

/// Storage-shaped insert payload for a new artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtworkRow {
    pub name: String,
    pub year: i32,
    pub description: String,
    pub source: String,
    pub artist: Value,
    pub images: Value,
    pub is_active: bool,
}

impl TryFrom<&ArtworkDraft> for NewArtworkRow {
    type Error = serde_json::Error;

    fn try_from(draft: &ArtworkDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            name: draft.name.clone(),
            year: draft.year,
            description: draft.description.clone(),
            source: draft.source.clone().unwrap_or_default(),
            artist: serde_json::to_value(&draft.artist)?,
            images: serde_json::to_value(&draft.images)?,
            is_active: draft.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(artist: Value, images: Value) -> ArtworkRow {
        ArtworkRow {
            id: uuid::Uuid::nil(),
            name: "The Night Café".into(),
            year: 1888,
            description: String::new(),
            source: "https://en.wikipedia.org/wiki/The_Night_Caf%C3%A9".into(),
            artist,
            images,
            is_active: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn row_maps_to_artwork_with_slug() {
        let artwork = row(
            json!({"name": "Vincent van Gogh", "image": "https://cdn.test/vvg.jpg"}),
            json!({
                "hero": {"large": "https://cdn.test/l.jpg"},
                "thumbnail": "https://cdn.test/t.jpg"
            }),
        )
        .into_artwork();

        assert_eq!(artwork.slug, "the-night-cafe");
        assert_eq!(artwork.artist.name, "Vincent van Gogh");
        assert_eq!(artwork.images.hero.large.as_deref(), Some("https://cdn.test/l.jpg"));
        assert_eq!(artwork.images.thumbnail.as_deref(), Some("https://cdn.test/t.jpg"));
        assert!(!artwork.is_active);
    }

    #[test]
    fn string_encoded_artist_is_accepted() {
        let encoded = json!("{\"name\":\"Vincent van Gogh\"}");
        let artwork = row(encoded, json!({})).into_artwork();
        assert_eq!(artwork.artist.name, "Vincent van Gogh");
        assert_eq!(artwork.artist.image, None);
    }

    #[test]
    fn malformed_columns_degrade_to_defaults() {
        let artwork = row(json!(42), json!("nope")).into_artwork();
        assert_eq!(artwork.artist, ArtistInfo::default());
        assert_eq!(artwork.images, ArtworkImages::default());

        let artwork = row(json!({"name": "X"}), Value::Null).into_artwork();
        assert_eq!(artwork.images, ArtworkImages::default());
    }

    #[test]
    fn insert_payload_flattens_optional_source() {
        let draft = ArtworkDraft {
            name: "Guernica".into(),
            year: 1937,
            description: String::new(),
            source: None,
            artist: ArtistInfo {
                name: "Pablo Picasso".into(),
                image: None,
            },
            images: ArtworkImages::default(),
            is_active: true,
        };
        let new_row = NewArtworkRow::try_from(&draft).unwrap();
        assert_eq!(new_row.source, "");
        assert_eq!(new_row.artist, json!({"name": "Pablo Picasso"}));
        assert_eq!(new_row.images, json!({"hero": {}}));
    }
}
