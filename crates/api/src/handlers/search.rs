//! Handler for title search.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gamezee_core::catalog::CategoryScope;
use gamezee_db::models::category::Category;
use gamezee_db::models::game::Game;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /search` (`?q=&category=`).
#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub q: String,
    /// `all` or a category id; absent means `all`.
    pub category: Option<String>,
}

/// Search page payload.
#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub results: Vec<Game>,
    pub categories: Vec<Category>,
    /// The category the results are narrowed to, when it is a known one.
    pub selected_category: Option<Category>,
}

/// GET /api/v1/search?q=&category=
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    params.validate()?;
    let scope = CategoryScope::from_param(params.category.as_deref())?;

    let (results, categories) = tokio::join!(
        state.catalog.search_games(&params.q, scope),
        state.catalog.categories(),
    );

    let selected_category = scope
        .category_id()
        .and_then(|id| categories.iter().find(|c| c.id == id).cloned());

    tracing::debug!(query = %params.q, %scope, results = results.len(), "Search completed");

    Ok(Json(DataResponse {
        data: SearchPage {
            query: params.q,
            results,
            categories,
            selected_category,
        },
    }))
}
