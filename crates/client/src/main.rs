//! Terminal slideshow over the public gallery.
//!
//! Usage: `galleria-slideshow [start-slug]`

use std::process::ExitCode;
use std::time::Duration;

use galleria_client::slideshow::{run_slideshow, SlideEvent, SlideshowEnd};
use galleria_client::{ClientConfig, GalleryClient};
use galleria_core::slideshow::{Slideshow, SlideshowConfig};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often idle queries are swept from the cache.
const GC_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "galleria_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env().expect("Invalid client configuration");
    let client = GalleryClient::new(&config).expect("Failed to build HTTP client");

    let cancel = CancellationToken::new();
    let gc = client.queries().spawn_gc(GC_INTERVAL, cancel.clone());

    let artworks = client.get_all_paintings(false).await;
    if artworks.is_empty() {
        println!("Nothing to show.");
        return ExitCode::SUCCESS;
    }

    let slugs: Vec<String> = artworks.iter().map(|a| a.slug.clone()).collect();
    let slideshow_config = SlideshowConfig::default();
    let slideshow = match std::env::args().nth(1) {
        Some(slug) => match Slideshow::starting_at(slugs, &slug, slideshow_config.threshold) {
            Some(slideshow) => slideshow,
            None => {
                eprintln!("No active artwork with slug {slug}");
                return ExitCode::FAILURE;
            }
        },
        None => Slideshow::new(slugs, 0, slideshow_config.threshold),
    };

    let first = slideshow
        .current_slug()
        .and_then(|s| artworks.iter().find(|a| a.slug == s));
    if let Some(first) = first {
        println!("{} ({}) by {}", first.name, first.year, first.artist.name);
    }

    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        ctrl_c.cancel();
    });

    let end = run_slideshow(slideshow, slideshow_config, cancel.clone(), |event| match event {
        SlideEvent::Progress(percent) if percent % 25 == 0 => println!("  {percent}%"),
        SlideEvent::Progress(_) => {}
        SlideEvent::Navigate(href) => {
            let artwork = artworks.iter().find(|a| a.href() == href);
            match artwork {
                Some(a) => println!("{} ({}) by {}  -> {href}", a.name, a.year, a.artist.name),
                None => println!("-> {href}"),
            }
        }
    })
    .await;

    if end == SlideshowEnd::Finished {
        println!("End of the gallery.");
    }

    cancel.cancel();
    gc.await.ok();
    ExitCode::SUCCESS
}
