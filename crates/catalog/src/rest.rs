//! Hosted REST backend.
//!
//! Talks to a PostgREST-compatible endpoint (`{base}/rest/v1/{table}`), the
//! interface exposed by hosted Postgres services. Filters use PostgREST query
//! syntax (`slug=eq.x`, `order=views.desc`, `title=wfts(english).x`) and the
//! view counter goes through the `increment_game_views` RPC function created
//! by the migrations.

use std::time::Duration;

use async_trait::async_trait;
use gamezee_core::catalog::CategoryScope;
use gamezee_core::search::SEARCH_CONFIG;
use gamezee_core::types::DbId;
use gamezee_db::models::category::Category;
use gamezee_db::models::game::Game;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{CatalogError, CatalogResult};
use crate::store::CatalogStore;

/// Per-request timeout for store calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Select clause embedding the owning category into each game.
const GAME_SELECT: &str = "*,category:categories(*)";

/// Ordering shared by all game listings.
const ORDER_BY_VIEWS: &str = "views.desc,id.asc";

type Params = Vec<(&'static str, String)>;

/// Catalog store backed by a hosted REST endpoint and an access key.
#[derive(Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: &str) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.base_url)
    }

    /// GET a table with the given query parameters and decode the row array.
    async fn select<T: DeserializeOwned>(&self, table: &str, params: &Params) -> CatalogResult<Vec<T>> {
        let response = self
            .client
            .get(self.url(table))
            .query(params)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        decode(response).await
    }
}

/// Turn a non-success status into [`CatalogError::Status`], else decode JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> CatalogResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<T>().await?)
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

fn category_slug_params(slug: &str) -> Params {
    vec![
        ("select", "*".to_string()),
        ("slug", format!("eq.{slug}")),
        ("limit", "1".to_string()),
    ]
}

fn game_list_params(scope: CategoryScope, limit: Option<i64>) -> Params {
    let mut params = vec![("select", GAME_SELECT.to_string())];
    if let Some(id) = scope.category_id() {
        params.push(("category_id", format!("eq.{id}")));
    }
    params.push(("order", ORDER_BY_VIEWS.to_string()));
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

fn game_slug_params(slug: &str) -> Params {
    vec![
        ("select", GAME_SELECT.to_string()),
        ("slug", format!("eq.{slug}")),
        ("limit", "1".to_string()),
    ]
}

fn similar_params(game_id: DbId, category_id: DbId, limit: i64) -> Params {
    vec![
        ("select", GAME_SELECT.to_string()),
        ("category_id", format!("eq.{category_id}")),
        ("id", format!("neq.{game_id}")),
        ("order", ORDER_BY_VIEWS.to_string()),
        ("limit", limit.to_string()),
    ]
}

fn search_params(query: &str, scope: CategoryScope) -> Params {
    let mut params = vec![
        ("select", GAME_SELECT.to_string()),
        ("title", format!("wfts({SEARCH_CONFIG}).{query}")),
    ];
    if let Some(id) = scope.category_id() {
        params.push(("category_id", format!("eq.{id}")));
    }
    params.push(("order", ORDER_BY_VIEWS.to_string()));
    params
}

// ---------------------------------------------------------------------------
// CatalogStore
// ---------------------------------------------------------------------------

#[async_trait]
impl CatalogStore for RestStore {
    fn backend(&self) -> &'static str {
        "rest"
    }

    async fn ping(&self) -> CatalogResult<()> {
        let params = vec![("select", "id".to_string()), ("limit", "1".to_string())];
        self.select::<serde_json::Value>("categories", &params)
            .await
            .map(|_| ())
    }

    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let params = vec![("select", "*".to_string()), ("order", "id.asc".to_string())];
        self.select("categories", &params).await
    }

    async fn category_by_slug(&self, slug: &str) -> CatalogResult<Option<Category>> {
        let rows: Vec<Category> = self.select("categories", &category_slug_params(slug)).await?;
        Ok(rows.into_iter().next())
    }

    async fn list_games(
        &self,
        scope: CategoryScope,
        limit: Option<i64>,
    ) -> CatalogResult<Vec<Game>> {
        self.select("games", &game_list_params(scope, limit)).await
    }

    async fn game_by_slug(&self, slug: &str) -> CatalogResult<Option<Game>> {
        let rows: Vec<Game> = self.select("games", &game_slug_params(slug)).await?;
        Ok(rows.into_iter().next())
    }

    async fn similar_games(
        &self,
        game_id: DbId,
        category_id: DbId,
        limit: i64,
    ) -> CatalogResult<Vec<Game>> {
        self.select("games", &similar_params(game_id, category_id, limit))
            .await
    }

    async fn search_games(&self, query: &str, scope: CategoryScope) -> CatalogResult<Vec<Game>> {
        self.select("games", &search_params(query, scope)).await
    }

    async fn increment_views(&self, game_id: DbId) -> CatalogResult<Option<i64>> {
        let response = self
            .client
            .post(self.url("rpc/increment_game_views"))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&json!({ "game_id": game_id }))
            .send()
            .await?;

        decode(response).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
