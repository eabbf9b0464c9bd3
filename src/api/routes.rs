//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_hero_handler, benchmarks_handler, delete_hero_handler, get_hero_handler, health_handler,
    list_heroes_handler, pro_players_handler, pro_teams_favorite_handler, pro_teams_handler,
    stats_handler, update_hero_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /heroes`, `POST /heroes`, `PUT /heroes`
/// - `GET /heroes/:id`, `DELETE /heroes/:id`
/// - `GET /benchmarks/:id`
/// - `GET /pro_players?page=&limit=`
/// - `GET /pro_teams?page=&limit=`
/// - `GET /pro_teams/favorite?page=&limit=`
/// - `GET /stats`, `GET /health`
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/heroes",
            get(list_heroes_handler)
                .post(add_hero_handler)
                .put(update_hero_handler),
        )
        .route(
            "/heroes/:id",
            get(get_hero_handler).delete(delete_hero_handler),
        )
        .route("/benchmarks/:id", get(benchmarks_handler))
        .route("/pro_players", get(pro_players_handler))
        .route("/pro_teams", get(pro_teams_handler))
        .route("/pro_teams/favorite", get(pro_teams_favorite_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
