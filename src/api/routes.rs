use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::compute_tournament_points,
    league::{get_standings, get_tournament_points, get_tournament_skins, get_tournaments},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/standings", get(get_standings))
        .route("/api/tournaments", get(get_tournaments))
        .route("/api/tournaments/:id/points", get(get_tournament_points))
        .route("/api/tournaments/:id/skins", get(get_tournament_skins))
        .route("/api/admin/tournaments/:id/points", post(compute_tournament_points))
        .with_state(state)
}
