//! Repository for the `games` table.
//!
//! Every read joins the owning category so callers get the embedded
//! `Game::category` without a second round trip. Listings are ordered by
//! descending view count, ties broken by id for stable pages.

use gamezee_core::search::SEARCH_CONFIG;
use gamezee_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{Game, GameRow};

/// `SELECT ... FROM ... JOIN` prefix shared by all game reads.
const SELECT_GAMES: &str = "\
    SELECT g.id, g.title, g.slug, g.description, g.thumbnail, g.category_id, \
           g.tags, g.embed_url, g.views, g.created_at, g.updated_at, \
           c.name AS category_name, c.slug AS category_slug, \
           c.created_at AS category_created_at \
    FROM games g \
    LEFT JOIN categories c ON c.id = g.category_id";

/// Ordering shared by all game listings.
const ORDER_BY_VIEWS: &str = "ORDER BY g.views DESC, g.id";

/// Read access to games plus the view counter.
pub struct GameRepo;

impl GameRepo {
    /// List games, optionally restricted to one category, most viewed first.
    ///
    /// `limit = None` returns every matching row.
    pub async fn list(
        pool: &PgPool,
        category_id: Option<DbId>,
        limit: Option<i64>,
    ) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!(
            "{SELECT_GAMES} \
             WHERE ($1::BIGINT IS NULL OR g.category_id = $1) \
             {ORDER_BY_VIEWS} \
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, GameRow>(&query)
            .bind(category_id)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    /// Find a game by its unique slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("{SELECT_GAMES} WHERE g.slug = $1");
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Game::from))
    }

    /// Other games in the same category, most viewed first.
    pub async fn list_similar(
        pool: &PgPool,
        game_id: DbId,
        category_id: DbId,
        limit: i64,
    ) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!(
            "{SELECT_GAMES} \
             WHERE g.category_id = $1 AND g.id <> $2 \
             {ORDER_BY_VIEWS} \
             LIMIT $3"
        );
        let rows = sqlx::query_as::<_, GameRow>(&query)
            .bind(category_id)
            .bind(game_id)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    /// Full-text search on titles using websearch syntax.
    ///
    /// `query` should already be normalized with
    /// [`gamezee_core::search::normalize_query`].
    pub async fn search(
        pool: &PgPool,
        query: &str,
        category_id: Option<DbId>,
    ) -> Result<Vec<Game>, sqlx::Error> {
        let sql = format!(
            "{SELECT_GAMES} \
             WHERE to_tsvector('{SEARCH_CONFIG}', g.title) \
                   @@ websearch_to_tsquery('{SEARCH_CONFIG}', $1) \
               AND ($2::BIGINT IS NULL OR g.category_id = $2) \
             {ORDER_BY_VIEWS}"
        );
        let rows = sqlx::query_as::<_, GameRow>(&sql)
            .bind(query)
            .bind(category_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    /// Atomically add one view and return the new count.
    ///
    /// Returns `None` if no game with the given ID exists.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE games SET views = views + 1 WHERE id = $1 RETURNING views",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
