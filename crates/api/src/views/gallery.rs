use galleria_core::artwork::Artwork;
use maud::{html, Markup};

use super::layout::base_document;

/// Home page: masonry grid of active artworks.
pub fn render_home(artworks: &[Artwork]) -> Markup {
    let content = html! {
        @if artworks.is_empty() {
            p.empty-gallery { "No artworks to show yet." }
        } @else {
            section.masonry {
                @for artwork in artworks {
                    (artwork_card(artwork))
                }
            }
        }
    };
    base_document("Gallery", !artworks.is_empty(), content)
}

fn artwork_card(artwork: &Artwork) -> Markup {
    html! {
        a.artwork-card href=(artwork.href()) {
            @if let Some(src) = artwork.images.card_image() {
                img src=(src) alt=(artwork.name) loading="lazy";
            } @else {
                div.image-placeholder {}
            }
            div.card-caption {
                h2 { (artwork.name) }
                p { (artwork.artist.name) }
            }
        }
    }
}
