use crate::domain::TeamId;

// DTOs for joined queries
#[derive(Debug, Clone, PartialEq)]
pub struct StandingRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub owner: String,
    pub total_points: i64,
    pub total_skins: i64,
    pub tournaments_scored: i64,
}
