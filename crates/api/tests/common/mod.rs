#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use gamezee_api::app::build_app;
use gamezee_api::config::ServerConfig;
use gamezee_api::state::AppState;
use gamezee_catalog::pg::PgStore;
use gamezee_catalog::{Catalog, CatalogStore, FallbackData, StoreConfig};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        store: StoreConfig::Unconfigured,
    }
}

/// Build the full application router around the given catalog, with the
/// same middleware stack production uses.
pub fn build_test_app(catalog: Catalog) -> Router {
    build_app(AppState {
        catalog,
        config: Arc::new(test_config()),
    })
}

/// App backed by the test database.
pub fn pg_app(pool: PgPool) -> Router {
    let store: Arc<dyn CatalogStore> = Arc::new(PgStore::new(pool));
    build_test_app(Catalog::new(Some(store), FallbackData::standard()))
}

/// App with no store at all; every page is served from fallback data.
pub fn unconfigured_app() -> Router {
    build_test_app(Catalog::unconfigured(FallbackData::standard()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub struct Seeded {
    pub action: i64,
    pub puzzle: i64,
}

async fn insert_category(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_game(pool: &PgPool, title: &str, category_id: i64, views: i64) -> i64 {
    let slug = title.to_lowercase().replace(' ', "-");
    sqlx::query_scalar(
        "INSERT INTO games (title, slug, description, thumbnail, category_id, tags, embed_url, views) \
         VALUES ($1, $2, 'A game', 'https://example.com/t.png', $3, ARRAY['html5', 'free'], \
                 'https://example.com/embed', $4) \
         RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .bind(category_id)
    .bind(views)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Two categories, six action games and two puzzle games.
pub async fn seed(pool: &PgPool) -> Seeded {
    let action = insert_category(pool, "Action", "action").await;
    let puzzle = insert_category(pool, "Puzzle", "puzzle").await;

    for (title, views) in [
        ("Moto Racer", 50),
        ("Stick Fighter", 900),
        ("Tank Battle", 300),
        ("Ninja Run", 10),
        ("Sky Racer", 75),
        ("Laser Duel", 60),
    ] {
        insert_game(pool, title, action, views).await;
    }
    insert_game(pool, "Block Puzzle", puzzle, 120).await;
    insert_game(pool, "Puzzle Racer", puzzle, 700).await;

    Seeded { action, puzzle }
}

pub fn views(games: &serde_json::Value) -> Vec<i64> {
    games
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["views"].as_i64().unwrap())
        .collect()
}

pub fn assert_non_increasing(values: &[i64]) {
    assert!(
        values.windows(2).all(|w| w[0] >= w[1]),
        "expected non-increasing views, got {values:?}"
    );
}
