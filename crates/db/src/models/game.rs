//! Game model and its joined row shape.

use gamezee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;

/// A game with its category embedded, as returned by every catalog query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: String,
    pub category_id: DbId,
    pub tags: Vec<String>,
    pub embed_url: String,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub category: Option<Category>,
}

/// A `games` row left-joined with its category.
///
/// The category columns are nullable only because of the outer join; the
/// foreign key guarantees they are present for stored rows.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: String,
    pub category_id: DbId,
    pub tags: Vec<String>,
    pub embed_url: String,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    pub category_created_at: Option<Timestamp>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        let category = match (row.category_name, row.category_slug, row.category_created_at) {
            (Some(name), Some(slug), Some(created_at)) => Some(Category {
                id: row.category_id,
                name,
                slug,
                created_at,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            thumbnail: row.thumbnail,
            category_id: row.category_id,
            tags: row.tags,
            embed_url: row.embed_url,
            views: row.views,
            created_at: row.created_at,
            updated_at: row.updated_at,
            category,
        }
    }
}
