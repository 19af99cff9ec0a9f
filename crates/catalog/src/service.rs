//! The [`Catalog`] service: page intents on top of a [`CatalogStore`].

use std::sync::Arc;

use chrono::Utc;
use gamezee_core::catalog::{
    is_degenerate_slug, CategoryScope, ALL_CATEGORY_ID, ALL_CATEGORY_NAME, ALL_CATEGORY_SLUG,
    FEATURED_GAMES_LIMIT, SIMILAR_GAMES_LIMIT,
};
use gamezee_core::search::normalize_query;
use gamezee_core::types::DbId;
use gamezee_db::models::category::Category;
use gamezee_db::models::game::Game;

use crate::error::{CatalogError, CatalogResult};
use crate::fallback::FallbackData;
use crate::store::CatalogStore;

/// Outcome of looking a game up by slug.
///
/// Unlike the other lookups this keeps "the slug does not exist" apart from
/// "the store could not be asked", so a page can 404 on the former and still
/// render placeholder content on the latter.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLookup {
    Found(Game),
    NotFound,
    /// Placeholder record carrying the requested slug.
    Fallback(Game),
}

impl GameLookup {
    pub fn game(&self) -> Option<&Game> {
        match self {
            Self::Found(game) | Self::Fallback(game) => Some(game),
            Self::NotFound => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Catalog access for page handlers. Cheap to clone.
#[derive(Clone)]
pub struct Catalog {
    store: Option<Arc<dyn CatalogStore>>,
    fallback: Arc<FallbackData>,
}

impl Catalog {
    /// `store = None` builds a catalog that serves only degraded results.
    pub fn new(store: Option<Arc<dyn CatalogStore>>, fallback: FallbackData) -> Self {
        Self {
            store,
            fallback: Arc::new(fallback),
        }
    }

    /// A catalog without a backing store.
    pub fn unconfigured(fallback: FallbackData) -> Self {
        Self::new(None, fallback)
    }

    pub fn backend(&self) -> &'static str {
        self.store.as_ref().map_or("unconfigured", |s| s.backend())
    }

    pub fn fallback(&self) -> &FallbackData {
        &self.fallback
    }

    fn store(&self) -> CatalogResult<&dyn CatalogStore> {
        self.store.as_deref().ok_or(CatalogError::Unconfigured)
    }

    pub async fn ping(&self) -> CatalogResult<()> {
        self.store()?.ping().await
    }

    // -----------------------------------------------------------------------
    // Explicit results
    // -----------------------------------------------------------------------

    /// Category by slug. The `all` sentinel is synthesized locally.
    pub async fn try_category_by_slug(&self, slug: &str) -> CatalogResult<Option<Category>> {
        if slug == ALL_CATEGORY_SLUG {
            return Ok(Some(all_category()));
        }
        self.store()?.category_by_slug(slug).await
    }

    pub async fn try_categories(&self) -> CatalogResult<Vec<Category>> {
        self.store()?.list_categories().await
    }

    pub async fn try_games_by_category(&self, scope: CategoryScope) -> CatalogResult<Vec<Game>> {
        self.store()?.list_games(scope, None).await
    }

    /// Most viewed games across every category.
    pub async fn try_featured_games(&self) -> CatalogResult<Vec<Game>> {
        self.store()?
            .list_games(CategoryScope::All, Some(FEATURED_GAMES_LIMIT))
            .await
    }

    pub async fn try_game_by_slug(&self, slug: &str) -> CatalogResult<Option<Game>> {
        if is_degenerate_slug(slug) {
            return Err(CatalogError::InvalidSlug(slug.to_string()));
        }
        self.store()?.game_by_slug(slug).await
    }

    /// Up to [`SIMILAR_GAMES_LIMIT`] other games from the same category.
    ///
    /// Non-positive ids (fallback records included) have no similar games.
    pub async fn try_similar_games(
        &self,
        game_id: DbId,
        category_id: DbId,
    ) -> CatalogResult<Vec<Game>> {
        if game_id <= 0 || category_id <= 0 {
            tracing::debug!(game_id, category_id, "Skipping similar games lookup");
            return Ok(Vec::new());
        }
        self.store()?
            .similar_games(game_id, category_id, SIMILAR_GAMES_LIMIT)
            .await
    }

    /// Title search. A blank query matches nothing.
    pub async fn try_search_games(
        &self,
        query: &str,
        scope: CategoryScope,
    ) -> CatalogResult<Vec<Game>> {
        let Some(normalized) = normalize_query(query) else {
            return Ok(Vec::new());
        };
        self.store()?.search_games(&normalized, scope).await
    }

    /// Add one view to a stored game; returns the new count.
    pub async fn try_increment_views(&self, game_id: DbId) -> CatalogResult<Option<i64>> {
        self.store()?.increment_views(game_id).await
    }

    // -----------------------------------------------------------------------
    // Degraded results
    // -----------------------------------------------------------------------

    /// Category by slug; store failures read as "not found".
    pub async fn category_by_slug(&self, slug: &str) -> Option<Category> {
        let result = self.try_category_by_slug(slug).await;
        degrade("category_by_slug", result, || None)
    }

    /// Every category; store failures yield the fallback set.
    pub async fn categories(&self) -> Vec<Category> {
        let result = self.try_categories().await;
        degrade("categories", result, || self.fallback.categories.clone())
    }

    pub async fn games_by_category(&self, scope: CategoryScope) -> Vec<Game> {
        let result = self.try_games_by_category(scope).await;
        degrade("games_by_category", result, Vec::new)
    }

    pub async fn featured_games(&self) -> Vec<Game> {
        let result = self.try_featured_games().await;
        degrade("featured_games", result, Vec::new)
    }

    /// Game by slug, substituting the fallback game whenever the store could
    /// not be asked (degenerate slug, no configuration, query failure).
    pub async fn game_by_slug(&self, slug: &str) -> GameLookup {
        match self.try_game_by_slug(slug).await {
            Ok(Some(game)) => GameLookup::Found(game),
            Ok(None) => {
                tracing::info!(slug, "No game found with slug");
                GameLookup::NotFound
            }
            Err(err) => {
                log_degraded("game_by_slug", &err);
                GameLookup::Fallback(self.fallback.game_with_slug(slug))
            }
        }
    }

    pub async fn similar_games(&self, game_id: DbId, category_id: DbId) -> Vec<Game> {
        let result = self.try_similar_games(game_id, category_id).await;
        degrade("similar_games", result, Vec::new)
    }

    pub async fn search_games(&self, query: &str, scope: CategoryScope) -> Vec<Game> {
        let result = self.try_search_games(query, scope).await;
        degrade("search_games", result, Vec::new)
    }

    /// Record a view for a looked-up game. Only stored games are counted;
    /// fallback and missing lookups are skipped.
    pub async fn record_view(&self, lookup: &GameLookup) -> Option<i64> {
        let GameLookup::Found(game) = lookup else {
            return None;
        };
        let result = self.try_increment_views(game.id).await;
        degrade("record_view", result, || None)
    }
}

/// The pseudo-category selecting every game.
fn all_category() -> Category {
    Category {
        id: ALL_CATEGORY_ID,
        name: ALL_CATEGORY_NAME.to_string(),
        slug: ALL_CATEGORY_SLUG.to_string(),
        created_at: Utc::now(),
    }
}

/// Unwrap a result, logging the error and substituting `recover()` on failure.
fn degrade<T>(operation: &'static str, result: CatalogResult<T>, recover: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|err| {
        log_degraded(operation, &err);
        recover()
    })
}

fn log_degraded(operation: &'static str, err: &CatalogError) {
    match err {
        CatalogError::Unconfigured | CatalogError::InvalidSlug(_) => {
            tracing::warn!(operation, error = %err, "Serving degraded catalog result");
        }
        _ => {
            tracing::error!(operation, error = %err, "Catalog query failed, serving degraded result");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
