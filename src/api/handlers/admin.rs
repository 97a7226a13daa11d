use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{is_authorized, AppState};
use crate::api::models::ComputeResponse;
use crate::domain::TournamentId;
use crate::scoring::ScoringError;
use crate::services::scoring::ScoringService;

pub async fn compute_tournament_points(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<TournamentId>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !is_authorized(&headers, &state.config.server.admin_token) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    log::info!("Admin triggered points run for tournament {}", tournament_id);

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(e) => {
            let error = ScoringError::storage(e.into());
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(ComputeResponse::failure(&error))).into_response();
        }
    };

    let service = ScoringService::new(state.config.clone());
    match service.compute(&mut conn, tournament_id) {
        Ok(summary) => Json(ComputeResponse::from_summary(&summary)).into_response(),
        Err(e) => {
            let status = if e.is_not_found() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ComputeResponse::failure(&e))).into_response()
        }
    }
}
