#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use galleria_api::app::build_router;
use galleria_api::config::{ServerConfig, StoreKind};
use galleria_api::service::GalleryService;
use galleria_api::state::AppState;
use galleria_core::artwork::{ArtistInfo, ArtworkImages, HeroImages};
use galleria_core::validation::ArtworkDraft;
use galleria_db::MemoryGalleryStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` backed by the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        store: StoreKind::Memory,
        ..ServerConfig::default()
    }
}

pub fn draft(name: &str, year: i32, artist: &str, is_active: bool) -> ArtworkDraft {
    let base = format!("https://images.galleria.test/{}", name.to_lowercase().replace(' ', "-"));
    ArtworkDraft {
        name: name.to_string(),
        year,
        description: format!("{name} by {artist}."),
        source: Some("https://en.wikipedia.org/wiki/Painting".to_string()),
        artist: ArtistInfo {
            name: artist.to_string(),
            image: None,
        },
        images: ArtworkImages {
            hero: HeroImages {
                large: Some(format!("{base}/hero-large.jpg")),
                small: Some(format!("{base}/hero-small.jpg")),
            },
            gallery: Some(format!("{base}/gallery.jpg")),
            thumbnail: Some(format!("{base}/thumbnail.jpg")),
        },
        is_active,
    }
}

/// Two visible artworks and one hidden one, in this order:
/// `starry-night`, `the-night-cafe`, `irises` (hidden).
pub fn seed_drafts() -> Vec<ArtworkDraft> {
    vec![
        draft("Starry Night", 1889, "Vincent Van Gogh", true),
        draft("The Night Café", 1888, "Vincent Van Gogh", true),
        draft("Irises", 1889, "Vincent Van Gogh", false),
    ]
}

/// Build the full application router over a seeded in-memory store.
///
/// The store handle is returned so tests can inspect it or take it offline.
pub fn build_test_app() -> (Router, Arc<MemoryGalleryStore>) {
    build_test_app_with(test_config(), &seed_drafts())
}

pub fn build_test_app_with(
    config: ServerConfig,
    drafts: &[ArtworkDraft],
) -> (Router, Arc<MemoryGalleryStore>) {
    let store = Arc::new(MemoryGalleryStore::with_drafts(drafts));
    let state = AppState::new(GalleryService::new(store.clone()), config);
    let app = build_router(state).expect("test router");
    (app, store)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::post(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(
        app,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// POST an urlencoded form. `fields` are encoded as-is, so values must not
/// need escaping beyond spaces.
pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{k}={}", v.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");
    send(
        app,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
