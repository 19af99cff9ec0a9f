pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /home                           featured games + categories
/// /categories                     every category
/// /categories/{slug}              category page (`all` = every game)
/// /games/{slug}                   game page, records a view
/// /search?q=&category=            title search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(handlers::home::home))
        .route("/categories", get(handlers::categories::list_categories))
        .route("/categories/{slug}", get(handlers::categories::get_category))
        .route("/games/{slug}", get(handlers::games::get_game))
        .route("/search", get(handlers::search::search))
}
