//! Handlers for category listing and category pages.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gamezee_core::error::CoreError;
use gamezee_db::models::category::Category;
use gamezee_db::models::game::Game;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Category page payload.
#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    /// Games in the category, most viewed first.
    pub games: Vec<Game>,
    /// Every category, for the filter bar.
    pub categories: Vec<Category>,
}

/// GET /api/v1/categories
///
/// Never fails: a store outage yields the fallback category set.
pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: state.catalog.categories().await,
    })
}

/// GET /api/v1/categories/{slug}
///
/// `all` lists every game. Unknown slugs (or an unreachable store) are 404.
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = state
        .catalog
        .category_by_slug(&slug)
        .await
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Category",
                key: slug.clone(),
            })
        })?;

    let (games, categories) = tokio::join!(
        state.catalog.games_by_category(category.scope()),
        state.catalog.categories(),
    );

    Ok(Json(DataResponse {
        data: CategoryPage {
            category,
            games,
            categories,
        },
    }))
}
