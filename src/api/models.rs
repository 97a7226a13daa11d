use serde::Serialize;

use crate::domain::{TeamPoints, Tournament};
use crate::scoring::{PointsSummary, ScoringError};
use crate::services::reports::Standing;

/// Body returned by the points endpoint, for both outcomes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResponse {
    pub success: bool,
    pub points_calculated: i64,
    pub skins_awarded: i64,
    pub message: String,
}

impl ComputeResponse {
    pub fn from_summary(summary: &PointsSummary) -> Self {
        Self {
            success: true,
            points_calculated: summary.points_calculated,
            skins_awarded: summary.skins_awarded,
            message: format!(
                "Calculated {} points and {} skins for {} teams",
                summary.points_calculated, summary.skins_awarded, summary.teams_scored
            ),
        }
    }

    pub fn failure(error: &ScoringError) -> Self {
        Self {
            success: false,
            points_calculated: 0,
            skins_awarded: 0,
            message: error.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub items: Vec<Standing>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPointsResponse {
    pub tournament: Tournament,
    pub teams: Vec<TeamPoints>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentListResponse {
    pub items: Vec<Tournament>,
    pub total: usize,
}
