//! Direct PostgreSQL backend.

use async_trait::async_trait;
use gamezee_core::catalog::CategoryScope;
use gamezee_core::types::DbId;
use gamezee_db::models::category::Category;
use gamezee_db::models::game::Game;
use gamezee_db::repositories::{CategoryRepo, GameRepo};
use gamezee_db::DbPool;

use crate::error::CatalogResult;
use crate::store::CatalogStore;

/// Catalog store backed by a sqlx connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect, verify the connection and apply pending migrations.
    pub async fn connect(database_url: &str) -> CatalogResult<Self> {
        let pool = gamezee_db::create_pool(database_url).await?;
        tracing::info!("Database connection pool created");

        gamezee_db::health_check(&pool).await?;
        tracing::info!("Database health check passed");

        gamezee_db::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> CatalogResult<()> {
        Ok(gamezee_db::health_check(&self.pool).await?)
    }

    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(CategoryRepo::list_all(&self.pool).await?)
    }

    async fn category_by_slug(&self, slug: &str) -> CatalogResult<Option<Category>> {
        Ok(CategoryRepo::find_by_slug(&self.pool, slug).await?)
    }

    async fn list_games(
        &self,
        scope: CategoryScope,
        limit: Option<i64>,
    ) -> CatalogResult<Vec<Game>> {
        Ok(GameRepo::list(&self.pool, scope.category_id(), limit).await?)
    }

    async fn game_by_slug(&self, slug: &str) -> CatalogResult<Option<Game>> {
        Ok(GameRepo::find_by_slug(&self.pool, slug).await?)
    }

    async fn similar_games(
        &self,
        game_id: DbId,
        category_id: DbId,
        limit: i64,
    ) -> CatalogResult<Vec<Game>> {
        Ok(GameRepo::list_similar(&self.pool, game_id, category_id, limit).await?)
    }

    async fn search_games(&self, query: &str, scope: CategoryScope) -> CatalogResult<Vec<Game>> {
        Ok(GameRepo::search(&self.pool, query, scope.category_id()).await?)
    }

    async fn increment_views(&self, game_id: DbId) -> CatalogResult<Option<i64>> {
        Ok(GameRepo::increment_views(&self.pool, game_id).await?)
    }
}
