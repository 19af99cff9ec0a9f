use async_trait::async_trait;
use gamezee_core::catalog::CategoryScope;
use gamezee_core::types::DbId;
use gamezee_db::models::category::Category;
use gamezee_db::models::game::Game;

use crate::error::CatalogResult;

/// A backend able to answer catalog queries.
///
/// Game listings are ordered by descending view count and carry their
/// embedded category. Implementations return errors as-is; deciding what to
/// show instead is the job of [`crate::Catalog`].
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Cheap reachability probe.
    async fn ping(&self) -> CatalogResult<()>;

    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    async fn category_by_slug(&self, slug: &str) -> CatalogResult<Option<Category>>;

    /// Games in `scope`, capped at `limit` when given.
    async fn list_games(&self, scope: CategoryScope, limit: Option<i64>)
        -> CatalogResult<Vec<Game>>;

    async fn game_by_slug(&self, slug: &str) -> CatalogResult<Option<Game>>;

    /// Games in `category_id` other than `game_id`.
    async fn similar_games(
        &self,
        game_id: DbId,
        category_id: DbId,
        limit: i64,
    ) -> CatalogResult<Vec<Game>>;

    /// Title search; `query` is already normalized.
    async fn search_games(&self, query: &str, scope: CategoryScope) -> CatalogResult<Vec<Game>>;

    /// Add one view in a single storage-side statement and return the new
    /// count, or `None` for an unknown id.
    async fn increment_views(&self, game_id: DbId) -> CatalogResult<Option<i64>>;
}
