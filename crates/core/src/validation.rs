//! Artwork creation payload and its validation rules.
//!
//! The same [`ArtworkDraft::validated`] call guards the dashboard form (before
//! any store call) and the create action (before insertion).

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::artwork::{ArtistInfo, ArtworkImages};

/// Earliest accepted creation year.
pub const MIN_YEAR: i32 = 1000;

/// Form field keys, in the order their errors are reported.
pub const FIELD_ORDER: [&str; 9] = [
    "name",
    "year",
    "artist_name",
    "source",
    "artist_image",
    "hero_large",
    "hero_small",
    "gallery",
    "thumbnail",
];

/// Key for errors that do not belong to a single field.
pub const GENERAL: &str = "general";

pub const MSG_NAME_REQUIRED: &str = "Artwork title is required";
pub const MSG_INVALID_YEAR: &str = "Please enter a valid year";

/// Schemes a stored link may use. Everything else (`javascript:`, `data:`,
/// `file:`) is rejected even when it parses as a URL.
const WEB_SCHEMES: [&str; 2] = ["http", "https"];

/// True for an absolute `http` or `https` URL.
pub fn is_web_url(value: &str) -> bool {
    value
        .split_once(':')
        .is_some_and(|(scheme, rest)| {
            WEB_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)) && rest.starts_with("//")
        })
}

/// The current calendar year (UTC), the upper bound for [`ArtworkDraft::year`].
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

fn default_active() -> bool {
    true
}

/// Input for creating a new artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ArtworkDraft {
    #[validate(length(min = 1, code = "name", message = "Artwork title is required"))]
    pub name: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(code = "source", message = "Source URL must be a valid URL"))]
    pub source: Option<String>,
    #[validate(nested)]
    pub artist: ArtistInfo,
    #[serde(default)]
    #[validate(nested)]
    pub images: ArtworkImages,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ArtworkDraft {
    /// Trim text fields and turn blank optional URLs into `None`.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        self.artist.name = self.artist.name.trim().to_string();
        self.source = blank_to_none(self.source);
        self.artist.image = blank_to_none(self.artist.image);
        self.images.hero.large = blank_to_none(self.images.hero.large);
        self.images.hero.small = blank_to_none(self.images.hero.small);
        self.images.gallery = blank_to_none(self.images.gallery);
        self.images.thumbnail = blank_to_none(self.images.thumbnail);
        self
    }

    /// Check every rule against an already normalized draft.
    pub fn check(&self, current_year: i32) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        if let Err(e) = self.validate() {
            errors.absorb(&e);
        }

        if !(MIN_YEAR..=current_year).contains(&self.year) {
            errors.insert("year", MSG_INVALID_YEAR);
        }

        for (field, value, message) in self.links() {
            if value.is_some_and(|v| !is_web_url(v)) {
                errors.insert(field, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn links(&self) -> [(&'static str, Option<&str>, &'static str); 6] {
        [
            ("source", self.source.as_deref(), "Source URL must be a valid URL"),
            (
                "artist_image",
                self.artist.image.as_deref(),
                "Artist image URL must be a valid URL",
            ),
            (
                "hero_large",
                self.images.hero.large.as_deref(),
                "Hero large image URL must be a valid URL",
            ),
            (
                "hero_small",
                self.images.hero.small.as_deref(),
                "Hero small image URL must be a valid URL",
            ),
            (
                "gallery",
                self.images.gallery.as_deref(),
                "Gallery image URL must be a valid URL",
            ),
            (
                "thumbnail",
                self.images.thumbnail.as_deref(),
                "Thumbnail image URL must be a valid URL",
            ),
        ]
    }

    /// Normalize, then check. Returns the draft ready for insertion.
    pub fn validated(self, current_year: i32) -> Result<Self, FormErrors> {
        let draft = self.normalized();
        draft.check(current_year)?;
        Ok(draft)
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// FormErrors
// ---------------------------------------------------------------------------

/// Field-keyed validation messages, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    /// A single error not tied to a field.
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(GENERAL, message);
        errors
    }

    /// Record `message` for `field` unless that field already has one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message reported to callers that only show one error: the first
    /// failing field in [`FIELD_ORDER`], then any general message.
    pub fn first_message(&self) -> Option<&str> {
        FIELD_ORDER
            .iter()
            .find_map(|field| self.get(field))
            .or_else(|| self.get(GENERAL))
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn absorb(&mut self, errors: &ValidationErrors) {
        for kind in errors.errors().values() {
            match kind {
                ValidationErrorsKind::Field(list) => {
                    for err in list {
                        let message = err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", err.code));
                        self.insert(err.code.to_string(), message);
                    }
                }
                ValidationErrorsKind::Struct(inner) => self.absorb(inner),
                ValidationErrorsKind::List(items) => {
                    for inner in items.values() {
                        self.absorb(inner);
                    }
                }
            }
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.first_message().unwrap_or("invalid input"))
    }
}
