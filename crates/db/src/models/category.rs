//! Category model.

use gamezee_core::catalog::{CategoryScope, ALL_CATEGORY_SLUG};
use gamezee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
}

impl Category {
    /// The listing scope this category selects. The `all` pseudo-category
    /// selects every game.
    pub fn scope(&self) -> CategoryScope {
        if self.slug == ALL_CATEGORY_SLUG {
            CategoryScope::All
        } else {
            CategoryScope::Id(self.id)
        }
    }
}
