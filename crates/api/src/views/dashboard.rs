//! Admin dashboard: the artwork table and the add-artwork dialog.

use galleria_core::artwork::Artwork;
use galleria_core::types::ArtworkId;
use galleria_core::validation::{FormErrors, GENERAL};
use maud::{html, Markup};

use super::layout::base_document;
use crate::forms::ArtworkForm;

/// An inline failure message, optionally pinned to one table row.
#[derive(Debug, Clone)]
pub struct DashboardNotice {
    pub artwork_id: Option<ArtworkId>,
    pub message: String,
}

/// Everything the dashboard page renders.
#[derive(Default)]
pub struct DashboardView<'a> {
    pub artworks: &'a [Artwork],
    /// Present while the add dialog is open.
    pub form: Option<(&'a ArtworkForm, &'a FormErrors)>,
    pub notice: Option<&'a DashboardNotice>,
}

struct FormField {
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    required: bool,
}

const fn field(
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    required: bool,
) -> FormField {
    FormField {
        name,
        label,
        kind,
        required,
    }
}

const FORM_FIELDS: [FormField; 10] = [
    field("name", "Title", "text", true),
    field("year", "Year", "number", true),
    field("description", "Description", "textarea", false),
    field("source", "Source URL", "url", false),
    field("artist_name", "Artist name", "text", true),
    field("artist_image", "Artist image URL", "url", false),
    field("hero_large", "Hero image (large)", "url", false),
    field("hero_small", "Hero image (small)", "url", false),
    field("gallery", "Gallery image", "url", false),
    field("thumbnail", "Thumbnail", "url", false),
];

fn field_value<'f>(form: &'f ArtworkForm, name: &str) -> &'f str {
    match name {
        "name" => &form.name,
        "year" => &form.year,
        "description" => &form.description,
        "source" => &form.source,
        "artist_name" => &form.artist_name,
        "artist_image" => &form.artist_image,
        "hero_large" => &form.hero_large,
        "hero_small" => &form.hero_small,
        "gallery" => &form.gallery,
        "thumbnail" => &form.thumbnail,
        _ => "",
    }
}

pub fn render_dashboard(view: &DashboardView<'_>) -> Markup {
    // Notices for rows that are not on screen are shown above the table.
    let general_notice = view.notice.filter(|n| {
        n.artwork_id
            .map_or(true, |id| !view.artworks.iter().any(|a| a.id == id))
    });
    let content = html! {
        section.dashboard {
            div.dashboard-header {
                h1 { "Artworks" }
                a.button.add-artwork href="/dashboard?add=true" { "Add artwork" }
            }
            @if let Some(notice) = general_notice {
                p.notice.error role="alert" { (notice.message) }
            }
            @if view.artworks.is_empty() {
                p.empty-gallery { "No artworks yet. Add the first one." }
            } @else {
                (artwork_table(view.artworks, view.notice))
            }
        }
        @if let Some((form, errors)) = view.form {
            (add_dialog(form, errors))
        }
    };
    base_document("Dashboard", false, content)
}

fn artwork_table(artworks: &[Artwork], notice: Option<&DashboardNotice>) -> Markup {
    html! {
        table.artwork-table {
            thead {
                tr {
                    th { "Image" }
                    th { "Title" }
                    th { "Artist" }
                    th { "Year" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody {
                @for artwork in artworks {
                    (artwork_row(artwork, notice.filter(|n| n.artwork_id == Some(artwork.id))))
                }
            }
        }
    }
}

fn artwork_row(artwork: &Artwork, notice: Option<&DashboardNotice>) -> Markup {
    let id = artwork.id;
    html! {
        tr.inactive[!artwork.is_active] data-artwork-id=(id.to_string()) {
            td {
                @if let Some(src) = artwork.images.card_image() {
                    img.table-thumbnail src=(src) alt=(artwork.name) loading="lazy";
                }
            }
            td {
                a href=(artwork.href()) { (artwork.name) }
            }
            td { (artwork.artist.name) }
            td { (artwork.year) }
            td {
                @if artwork.is_active {
                    span.badge.active { "Visible" }
                } @else {
                    span.badge.hidden { "Hidden" }
                }
            }
            td.row-actions {
                button.secondary type="button" disabled title="Editing is not available yet" {
                    "Edit"
                }
                form method="post" action=(format!("/dashboard/artworks/{id}/toggle")) {
                    button type="submit" {
                        @if artwork.is_active { "Hide" } @else { "Show" }
                    }
                }
                form method="post" action=(format!("/dashboard/artworks/{id}/delete"))
                    onsubmit="return confirm('Delete this artwork? This cannot be undone.')"
                {
                    button.danger type="submit" { "Delete" }
                }
                @if let Some(notice) = notice {
                    p.notice.error role="alert" { (notice.message) }
                }
            }
        }
    }
}

fn add_dialog(form: &ArtworkForm, errors: &FormErrors) -> Markup {
    html! {
        div.dialog-backdrop {
            dialog.add-dialog open {
                h2 { "Add artwork" }
                @if let Some(general) = errors.get(GENERAL) {
                    p.notice.error role="alert" { (general) }
                }
                form method="post" action="/dashboard/artworks" {
                    @for field in &FORM_FIELDS {
                        (form_field(field, field_value(form, field.name), errors.get(field.name)))
                    }
                    label.checkbox {
                        input type="checkbox" name="is_active" checked[form.is_active()];
                        " Visible in the gallery"
                    }
                    div.dialog-actions {
                        a.button.secondary href="/dashboard" { "Cancel" }
                        button type="submit" { "Save" }
                    }
                }
            }
        }
    }
}

fn form_field(field: &FormField, value: &str, error: Option<&str>) -> Markup {
    html! {
        div.form-field.has-error[error.is_some()] {
            label for=(field.name) { (field.label) }
            @if field.kind == "textarea" {
                textarea id=(field.name) name=(field.name) rows="4" { (value) }
            } @else {
                input id=(field.name) name=(field.name) type=(field.kind) value=(value)
                    required[field.required];
            }
            @if let Some(message) = error {
                p.field-error { (message) }
            }
        }
    }
}
