use maud::{html, Markup, DOCTYPE};

/// Wrap page content in the shared document shell and header.
pub fn base_document(title: &str, show_slideshow_link: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | galleria." }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                (main_header(show_slideshow_link))
                main.layout-container { (content) }
            }
        }
    }
}

fn main_header(show_slideshow_link: bool) -> Markup {
    html! {
        header.main-header {
            a.logo href="/" { "galleria." }
            nav.main-nav {
                @if show_slideshow_link {
                    a.slideshow-link href="/slideshow" { "Start slideshow" }
                }
                a href="/dashboard" { "Dashboard" }
            }
        }
    }
}

/// 404 page for unknown slugs and routes.
pub fn render_not_found(message: &str) -> Markup {
    let content = html! {
        section.not-found {
            h1 { "Not found" }
            p { (message) }
            a href="/" { "Back to the gallery" }
        }
    };
    base_document("Not found", false, content)
}
