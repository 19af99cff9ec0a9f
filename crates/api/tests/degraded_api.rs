//! Integration tests for the pages served without a catalog store.
//!
//! Every page must still render: categories fall back to the standard set,
//! game pages serve the placeholder game, and lists come back empty.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn categories_fall_back_to_standard_six() {
    let response = get(common::unconfigured_app(), "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let slugs: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        slugs,
        ["action", "adventure", "puzzle", "racing", "sports", "strategy"]
    );
}

#[tokio::test]
async fn home_has_no_games_but_keeps_navigation() {
    let json = body_json(get(common::unconfigured_app(), "/api/v1/home").await).await;

    assert_eq!(json["data"]["featured_games"], serde_json::json!([]));
    assert_eq!(json["data"]["categories"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn game_page_serves_fallback_game_with_requested_slug() {
    let response = get(common::unconfigured_app(), "/api/v1/games/moto-racer").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["fallback"], true);
    assert_eq!(data["game"]["slug"], "moto-racer");
    assert_eq!(data["game"]["title"], "Fallback Game");
    assert_eq!(data["game"]["views"], 100);
    assert_eq!(data["game"]["category"]["slug"], "test-category");
    assert_eq!(data["similar_games"], serde_json::json!([]));
}

#[tokio::test]
async fn all_category_page_renders_with_no_games() {
    let response = get(common::unconfigured_app(), "/api/v1/categories/all").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["category"]["slug"], "all");
    assert_eq!(json["data"]["games"], serde_json::json!([]));
    assert_eq!(json["data"]["categories"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn named_category_page_is_404() {
    let response = get(common::unconfigured_app(), "/api/v1/categories/action").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_returns_empty_results() {
    let response = get(common::unconfigured_app(), "/api/v1/search?q=racer&category=3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["results"], serde_json::json!([]));
    assert_eq!(json["data"]["selected_category"]["slug"], "puzzle");
}

#[tokio::test]
async fn overlong_search_query_is_rejected() {
    let uri = format!("/api/v1/search?q={}", "a".repeat(201));
    let response = get(common::unconfigured_app(), &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn uppercase_all_category_is_rejected() {
    let response = get(common::unconfigured_app(), "/api/v1/search?q=racer&category=ALL").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
