//! Handler for the game detail page.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gamezee_catalog::GameLookup;
use gamezee_core::catalog::is_degenerate_slug;
use gamezee_core::error::CoreError;
use gamezee_db::models::game::Game;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Game page payload.
#[derive(Debug, Serialize)]
pub struct GamePage {
    pub game: Game,
    /// Other games from the same category.
    pub similar_games: Vec<Game>,
    /// True when `game` is placeholder data because the store was unavailable.
    pub fallback: bool,
}

/// GET /api/v1/games/{slug}
///
/// Records a view for stored games, then loads similar games. A fallback
/// game is served as-is, with no view recorded and no similar games.
pub async fn get_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Game",
            key: slug.clone(),
        })
    };

    if is_degenerate_slug(&slug) {
        return Err(not_found());
    }

    let lookup = state.catalog.game_by_slug(&slug).await;

    let page = match &lookup {
        GameLookup::NotFound => return Err(not_found()),
        GameLookup::Fallback(game) => GamePage {
            game: game.clone(),
            similar_games: Vec::new(),
            fallback: true,
        },
        GameLookup::Found(found) => {
            let (views, similar_games) = tokio::join!(
                state.catalog.record_view(&lookup),
                state.catalog.similar_games(found.id, found.category_id),
            );

            let mut game = found.clone();
            if let Some(views) = views {
                game.views = views;
            }
            tracing::debug!(game_id = game.id, views = game.views, "Game view recorded");

            GamePage {
                game,
                similar_games,
                fallback: false,
            }
        }
    };

    Ok(Json(DataResponse { data: page }))
}
