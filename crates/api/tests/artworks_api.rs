//! Integration tests for the `/api/v1/artworks` JSON API.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, delete, get, post_empty, post_json, send};
use galleria_db::GalleryStore;
use serde_json::json;

fn names(json: &serde_json::Value) -> Vec<&str> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing and lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_defaults_to_active_artworks_in_insertion_order() {
    let (app, _) = common::build_test_app();

    let response = get(&app, "/api/v1/artworks").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(names(&json), ["Starry Night", "The Night Café"]);
    assert_eq!(json["data"][1]["slug"], "the-night-cafe");

    let all = body_json(get(&app, "/api/v1/artworks?include_inactive=true").await).await;
    assert_eq!(names(&all), ["Starry Night", "The Night Café", "Irises"]);
}

#[tokio::test]
async fn get_by_slug_hides_inactive_unless_requested() {
    let (app, _) = common::build_test_app();

    let response = get(&app, "/api/v1/artworks/slug/starry-night").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["year"], 1889);

    let hidden = get(&app, "/api/v1/artworks/slug/irises").await;
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(hidden).await["code"], "NOT_FOUND");

    let shown = get(&app, "/api/v1/artworks/slug/irises?include_inactive=true").await;
    assert_eq!(shown.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_by_id_round_trips_the_listing() {
    let (app, _) = common::build_test_app();
    let list = body_json(get(&app, "/api/v1/artworks").await).await;
    let id = list["data"][0]["id"].as_str().unwrap().to_string();

    let response = get(&app, &format!("/api/v1/artworks/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Starry Night");
}

#[tokio::test]
async fn malformed_id_is_a_bad_request() {
    let (app, _) = common::build_test_app();
    let response = get(&app, "/api/v1/artworks/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_and_appends() {
    let (app, _) = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/artworks",
        json!({
            "name": "  Guernica ",
            "year": 1937,
            "artist": { "name": "Pablo Picasso" },
            "images": { "thumbnail": "https://images.galleria.test/guernica.jpg" }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["name"], "Guernica");
    assert_eq!(created["data"]["slug"], "guernica");
    assert_eq!(created["data"]["is_active"], true);

    let list = body_json(get(&app, "/api/v1/artworks").await).await;
    assert_eq!(names(&list).last(), Some(&"Guernica"));
}

#[tokio::test]
async fn create_with_invalid_fields_returns_field_errors() {
    let (app, store) = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/artworks",
        json!({
            "name": "",
            "year": 999,
            "source": "not a url",
            "artist": { "name": "Anonymous" }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Artwork title is required");
    assert_eq!(json["fields"]["year"], "Please enter a valid year");
    assert_eq!(json["fields"]["source"], "Source URL must be a valid URL");

    assert_eq!(store.list_artworks(true).await.unwrap().len(), 3);
}

#[tokio::test]
async fn toggle_flips_visibility() {
    let (app, _) = common::build_test_app();
    let all = body_json(get(&app, "/api/v1/artworks?include_inactive=true").await).await;
    let irises = all["data"][2]["id"].as_str().unwrap().to_string();

    let response = post_empty(&app, &format!("/api/v1/artworks/{irises}/toggle")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["is_active"], true);

    let active = body_json(get(&app, "/api/v1/artworks").await).await;
    assert_eq!(names(&active).len(), 3);
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let (app, _) = common::build_test_app();
    let list = body_json(get(&app, "/api/v1/artworks").await).await;
    let id = list["data"][0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/artworks/{id}");

    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_outage_is_503_on_the_json_api() {
    let (app, store) = common::build_test_app();
    store.set_offline(true);

    let response = get(&app, "/api/v1/artworks").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "STORE_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Public API key
// ---------------------------------------------------------------------------

#[tokio::test]
async fn configured_api_key_is_required() {
    let config = galleria_api::config::ServerConfig {
        public_api_key: Some("pk_test".into()),
        ..common::test_config()
    };
    let (app, _) = common::build_test_app_with(config, &common::seed_drafts());

    let missing = get(&app, "/api/v1/artworks").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(missing).await["code"], "UNAUTHORIZED");

    let wrong = send(
        &app,
        Request::get("/api/v1/artworks")
            .header("apikey", "nope")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let right = send(
        &app,
        Request::get("/api/v1/artworks")
            .header("apikey", "pk_test")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(right.status(), StatusCode::OK);

    // Pages are not behind the key.
    assert_eq!(get(&app, "/").await.status(), StatusCode::OK);
}
