//! `GalleryClient` against a stub API served on a local port.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use galleria_client::{ClientConfig, GalleryClient, QueryClient, QueryOptions};
use galleria_core::artwork::{ArtistInfo, Artwork, ArtworkImages};
use serde::Deserialize;
use serde_json::json;

#[derive(Clone, Default)]
struct Stub {
    list_calls: Arc<AtomicU32>,
    required_key: Option<&'static str>,
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(default)]
    include_inactive: bool,
}

fn artwork(name: &str, is_active: bool) -> Artwork {
    Artwork::new(
        uuid_for(name),
        name.to_string(),
        1889,
        String::new(),
        String::new(),
        ArtistInfo {
            name: "Vincent Van Gogh".into(),
            image: None,
        },
        ArtworkImages::default(),
        is_active,
        chrono::Utc::now(),
    )
}

fn uuid_for(name: &str) -> galleria_core::types::ArtworkId {
    let n = name.len() as u128;
    galleria_core::types::ArtworkId::from_u128(n)
}

fn catalogue() -> Vec<Artwork> {
    vec![artwork("Starry Night", true), artwork("Irises", false)]
}

fn authorized(stub: &Stub, headers: &HeaderMap) -> bool {
    match stub.required_key {
        Some(key) => headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(key),
        None => true,
    }
}

async fn list(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    stub.list_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&stub, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Missing apikey header", "code": "UNAUTHORIZED" })),
        );
    }
    let data: Vec<Artwork> = catalogue()
        .into_iter()
        .filter(|a| params.include_inactive || a.is_active)
        .collect();
    (StatusCode::OK, Json(json!({ "data": data })))
}

async fn by_slug(Path(slug): Path<String>) -> impl IntoResponse {
    match catalogue().into_iter().find(|a| a.slug == slug && a.is_active) {
        Some(a) => (StatusCode::OK, Json(json!({ "data": a }))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "not found", "code": "NOT_FOUND" })),
        ),
    }
}

async fn toggle(Path(_id): Path<String>) -> impl IntoResponse {
    Json(json!({ "data": artwork("Irises", true) }))
}

async fn spawn_stub(stub: Stub) -> String {
    let app = Router::new()
        .route("/api/v1/artworks", get(list))
        .route("/api/v1/artworks/slug/{slug}", get(by_slug))
        .route("/api/v1/artworks/{id}/toggle", post(toggle))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(api_url: String, api_key: Option<&str>) -> GalleryClient {
    let config = ClientConfig {
        api_url,
        api_key: api_key.map(str::to_owned),
        ..ClientConfig::default()
    };
    let queries = QueryClient::new(QueryOptions::default().with_retry(0));
    GalleryClient::with_queries(&config, queries).unwrap()
}

#[tokio::test]
async fn lists_are_cached_per_visibility() {
    let stub = Stub::default();
    let calls = stub.list_calls.clone();
    let client = client(spawn_stub(stub).await, None);

    let active = client.get_all_paintings(false).await;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].slug, "starry-night");

    assert_eq!(client.get_all_paintings(false).await.len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(client.get_all_paintings(true).await.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn missing_slug_is_none() {
    let client = client(spawn_stub(Stub::default()).await, None);

    assert_eq!(
        client.get_painting_by_slug("starry-night").await.unwrap().name,
        "Starry Night"
    );
    assert!(client.get_painting_by_slug("irises").await.is_none());
}

#[tokio::test]
async fn mutations_invalidate_cached_lists() {
    let stub = Stub::default();
    let calls = stub.list_calls.clone();
    let client = client(spawn_stub(stub).await, None);

    client.get_all_paintings(false).await;
    let toggled = client
        .toggle_visibility(uuid_for("Irises"))
        .await
        .unwrap();
    assert!(toggled.is_active);

    client.get_all_paintings(false).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn api_key_is_sent_when_configured() {
    let stub = Stub {
        required_key: Some("pk_test"),
        ..Stub::default()
    };
    let url = spawn_stub(stub).await;

    assert!(client(url.clone(), None).get_all_paintings(false).await.is_empty());
    assert_eq!(client(url, Some("pk_test")).get_all_paintings(false).await.len(), 1);
}

#[tokio::test]
async fn unreachable_api_degrades_to_empty() {
    let client = client("http://127.0.0.1:9".into(), None);
    assert!(client.get_all_paintings(true).await.is_empty());
    assert!(client.get_painting_by_slug("starry-night").await.is_none());
}
