//! Handler for the landing page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gamezee_db::models::category::Category;
use gamezee_db::models::game::Game;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

/// Landing page payload.
#[derive(Debug, Serialize)]
pub struct HomePage {
    /// Most viewed games across the catalog.
    pub featured_games: Vec<Game>,
    /// Category navigation; the fallback set when the store is down.
    pub categories: Vec<Category>,
}

/// GET /api/v1/home
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let (featured_games, categories) =
        tokio::join!(state.catalog.featured_games(), state.catalog.categories());

    tracing::debug!(games = featured_games.len(), "Home page assembled");

    Json(DataResponse {
        data: HomePage {
            featured_games,
            categories,
        },
    })
}
