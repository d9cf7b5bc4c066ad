//! Integration tests for the dashboard pages and form actions.

mod common;

use axum::http::{header, StatusCode};
use common::{body_text, get, post_empty, post_form};
use galleria_api::actions::{MSG_CREATE_FAILED, MSG_TOGGLE_FAILED};
use galleria_db::GalleryStore;

#[tokio::test]
async fn dashboard_lists_every_artwork() {
    let (app, _) = common::build_test_app();
    let response = get(&app, "/dashboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Starry Night"));
    assert!(html.contains("Irises"));
    assert!(html.contains("Hidden"));
    assert!(!html.contains("<dialog"));
}

#[tokio::test]
async fn add_query_opens_the_form() {
    let (app, _) = common::build_test_app();
    let html = body_text(get(&app, "/dashboard?add=true").await).await;

    assert!(html.contains("<dialog"));
    assert!(html.contains("action=\"/dashboard/artworks\""));
    assert!(html.contains("name=\"is_active\" checked"));
}

#[tokio::test]
async fn valid_form_creates_and_redirects() {
    let (app, store) = common::build_test_app();
    let response = post_form(
        &app,
        "/dashboard/artworks",
        &[
            ("name", "Guernica"),
            ("year", "1937"),
            ("artist_name", "Pablo Picasso"),
            ("source", ""),
            ("is_active", "on"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/dashboard");

    let artworks = store.list_artworks(true).await.unwrap();
    let created = artworks.last().unwrap();
    assert_eq!(created.slug, "guernica");
    assert!(created.is_active);
    assert_eq!(created.source, "");
}

#[tokio::test]
async fn invalid_form_is_rerendered_with_messages() {
    let (app, store) = common::build_test_app();
    let response = post_form(
        &app,
        "/dashboard/artworks",
        &[("name", "  "), ("year", "3000"), ("artist_name", "Someone")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Artwork title is required"));
    assert!(html.contains("Please enter a valid year"));
    assert!(html.contains("value=\"Someone\""));
    assert_eq!(store.list_artworks(true).await.unwrap().len(), 3);
}

#[tokio::test]
async fn store_failure_on_create_shows_general_error() {
    let (app, store) = common::build_test_app();
    store.set_offline(true);

    let response = post_form(
        &app,
        "/dashboard/artworks",
        &[("name", "Guernica"), ("year", "1937"), ("artist_name", "Picasso")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains(MSG_CREATE_FAILED));
}

#[tokio::test]
async fn toggle_and_delete_redirect_back() {
    let (app, store) = common::build_test_app();
    let starry = store.list_artworks(false).await.unwrap().remove(0);

    let response = post_empty(&app, &format!("/dashboard/artworks/{}/toggle", starry.id)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let toggled = store.find_artwork(starry.id).await.unwrap().unwrap();
    assert!(!toggled.is_active);

    let response = post_empty(&app, &format!("/dashboard/artworks/{}/delete", starry.id)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(store.find_artwork(starry.id).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_a_missing_artwork_shows_inline_error() {
    let (app, _) = common::build_test_app();
    let id = uuid::Uuid::now_v7();

    let response = post_empty(&app, &format!("/dashboard/artworks/{id}/delete")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response)
        .await
        .contains(&format!("Artwork {id} no longer exists")));
}

#[tokio::test]
async fn store_failure_on_toggle_shows_inline_error() {
    let (app, store) = common::build_test_app();
    let starry = store.list_artworks(false).await.unwrap().remove(0);
    store.set_offline(true);

    let response = post_empty(&app, &format!("/dashboard/artworks/{}/toggle", starry.id)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains(MSG_TOGGLE_FAILED));
}

#[tokio::test]
async fn script_source_links_are_refused() {
    let (app, store) = common::build_test_app();
    let response = post_form(
        &app,
        "/dashboard/artworks",
        &[
            ("name", "Evil"),
            ("year", "1937"),
            ("artist_name", "Someone"),
            ("source", "javascript:alert(document.cookie)"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Source URL must be a valid URL"));
    assert_eq!(store.list_artworks(true).await.unwrap().len(), 3);
    assert_eq!(get(&app, "/gallery/evil").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_recovers_once_the_store_is_back() {
    let (app, store) = common::build_test_app();
    store.set_offline(true);
    assert!(!body_text(get(&app, "/dashboard").await)
        .await
        .contains("Starry Night"));

    store.set_offline(false);
    assert!(body_text(get(&app, "/dashboard").await)
        .await
        .contains("Starry Night"));
}
