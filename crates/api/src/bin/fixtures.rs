//! Legacy fixture server.
//!
//! Serves the static painting fixtures the gallery was first built against,
//! for frontends that still point at the mock API.
//!
//! | Env Var         | Default                    |
//! |-----------------|----------------------------|
//! | `FIXTURE_PORT`  | `3500`                     |
//! | `FIXTURES_PATH` | `fixtures/paintings.json`  |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use galleria_api::fixture_server::{fixture_router, DEFAULT_FIXTURE_PORT};
use galleria_db::fixtures::load_fixtures;
use galleria_db::MemoryGalleryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "galleria_fixtures=debug,galleria_api=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("FIXTURE_PORT")
        .ok()
        .map(|p| p.parse().expect("FIXTURE_PORT must be a port number"))
        .unwrap_or(DEFAULT_FIXTURE_PORT);
    let path = std::env::var("FIXTURES_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("fixtures/paintings.json"));

    let drafts = load_fixtures(&path).expect("Failed to load fixtures");
    let store = Arc::new(MemoryGalleryStore::with_drafts(&drafts));
    tracing::info!(path = %path.display(), count = drafts.len(), "Fixtures loaded");

    let app = fixture_router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Starting fixture server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await
        .expect("Server error");
}
