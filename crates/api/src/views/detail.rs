use galleria_core::artwork::{gallery_href, Artwork};
use galleria_core::slideshow::SlideshowConfig;
use galleria_core::validation::is_web_url;
use maud::{html, Markup, PreEscaped};

use super::layout::base_document;
use crate::service::SlideContext;

/// Artwork detail page with the slideshow footer.
///
/// The footer carries the timer parameters as data attributes; the inline
/// script advances the progress bar and navigates to `data-next` once the
/// threshold is reached. The last slide has no `data-next` and stops.
pub fn render_detail(ctx: &SlideContext, slideshow: &SlideshowConfig, modal: bool) -> Markup {
    let artwork = &ctx.artwork;
    let content = html! {
        article.artwork-detail {
            (hero(artwork))
            section.artwork-text {
                p.artwork-description { (artwork.description) }
                @if is_web_url(&artwork.source) {
                    a.artwork-source
                        href=(artwork.source)
                        target="_blank"
                        rel="noopener noreferrer"
                    {
                        "Go to source"
                    }
                }
            }
        }
        (slideshow_footer(ctx, slideshow))
        @if modal {
            (lightbox(artwork))
        }
        script { (PreEscaped(super::SLIDESHOW_JS)) }
    };
    base_document(&artwork.name, false, content)
}

fn hero(artwork: &Artwork) -> Markup {
    html! {
        section.artwork-hero {
            @if let Some(large) = artwork.images.hero_large() {
                picture {
                    @if let Some(small) = artwork.images.hero_small() {
                        source media="(max-width: 768px)" srcset=(small);
                    }
                    img src=(large) alt=(artwork.name);
                }
                a.view-image href=(format!("{}?modal=true", artwork.href())) { "View image" }
            } @else {
                div.image-placeholder {}
            }
            div.artwork-heading {
                h1 { (artwork.name) }
                p.artist-name { (artwork.artist.name) }
                @if let Some(portrait) = &artwork.artist.image {
                    img.artist-image src=(portrait) alt=(artwork.artist.name);
                }
            }
            span.artwork-year { (artwork.year) }
        }
    }
}

fn slideshow_footer(ctx: &SlideContext, slideshow: &SlideshowConfig) -> Markup {
    let next_href = ctx.next.as_ref().map(|a| gallery_href(&a.slug));
    html! {
        footer id="slideshow" class="slideshow-footer"
            data-tick-ms=(slideshow.tick_interval.as_millis().to_string())
            data-threshold=(slideshow.threshold)
            data-next=[next_href.as_deref()]
        {
            div.slideshow-progress {
                div id="slideshow-bar" class="slideshow-bar" style="width: 0%" {}
            }
            div.slideshow-meta {
                div {
                    h3 { (ctx.artwork.name) }
                    p { (ctx.artwork.artist.name) }
                }
                span.slideshow-position { (ctx.index + 1) " / " (ctx.total) }
                nav.slideshow-controls {
                    @if let Some(prev) = &ctx.previous {
                        a.slideshow-prev href=(prev.href()) { "Previous" }
                    } @else {
                        span.slideshow-prev.disabled { "Previous" }
                    }
                    @if let Some(next) = &ctx.next {
                        a.slideshow-next href=(next.href()) { "Next" }
                    } @else {
                        span.slideshow-next.disabled { "Next" }
                    }
                }
            }
        }
    }
}

fn lightbox(artwork: &Artwork) -> Markup {
    html! {
        div.lightbox role="dialog" aria-modal="true" {
            a.lightbox-close href=(artwork.href()) { "Close" }
            @if let Some(large) = artwork.images.hero_large() {
                img src=(large) alt=(artwork.name);
            }
        }
    }
}
