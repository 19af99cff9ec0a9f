//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, slug, created_at";

/// Read access to categories. Categories are reference data managed outside
/// this service, so there are no write methods.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category, in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its unique slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE slug = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
