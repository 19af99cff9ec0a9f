//! Static placeholder data served when the store cannot answer.

use chrono::Utc;
use gamezee_core::types::DbId;
use gamezee_db::models::category::Category;
use gamezee_db::models::game::Game;

/// Id carried by every synthesized record. Stored rows start at 1, so a
/// fallback record can never collide with one.
pub const FALLBACK_ID: DbId = 0;

/// Category names and slugs shown when the category list cannot be loaded.
const STANDARD_CATEGORIES: [(&str, &str); 6] = [
    ("Action", "action"),
    ("Adventure", "adventure"),
    ("Puzzle", "puzzle"),
    ("Racing", "racing"),
    ("Sports", "sports"),
    ("Strategy", "strategy"),
];

/// Placeholder records handed to [`crate::Catalog`] at construction.
#[derive(Debug, Clone)]
pub struct FallbackData {
    /// Returned by the category listing when the store call fails.
    pub categories: Vec<Category>,
    /// Returned, re-slugged, when a game lookup cannot reach the store.
    pub game: Game,
}

impl FallbackData {
    /// The six standard categories and a clearly marked test game.
    pub fn standard() -> Self {
        let now = Utc::now();

        let categories = STANDARD_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(&(name, slug), id)| Category {
                id,
                name: name.to_string(),
                slug: slug.to_string(),
                created_at: now,
            })
            .collect();

        let game = Game {
            id: FALLBACK_ID,
            title: "Fallback Game".to_string(),
            slug: "fallback-game".to_string(),
            description: "This is a fallback game used for testing when the database \
                          connection fails."
                .to_string(),
            thumbnail: "https://i.imgur.com/uHE8xGu.png".to_string(),
            category_id: FALLBACK_ID,
            tags: vec!["fallback".to_string(), "test".to_string()],
            embed_url: "https://www.addictinggames.com/embed/html5-games/24614".to_string(),
            views: 100,
            created_at: now,
            updated_at: now,
            category: Some(Category {
                id: FALLBACK_ID,
                name: "Test Category".to_string(),
                slug: "test-category".to_string(),
                created_at: now,
            }),
        };

        Self { categories, game }
    }

    /// The fallback game, carrying the slug the caller asked for.
    pub fn game_with_slug(&self, slug: &str) -> Game {
        Game {
            slug: slug.to_string(),
            ..self.game.clone()
        }
    }
}
