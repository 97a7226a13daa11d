use anyhow::{anyhow, Result};
use log::{error, info};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::database;
use crate::domain::TournamentId;
use crate::scoring::{PointsSummary, ScoringEngine, ScoringError, SqliteStore};

pub struct ScoringService {
    config: AppConfig,
}

impl ScoringService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Runs the engine for one tournament inside a single transaction, so a
    /// failure part way through leaves the previous results in place.
    pub fn compute(&self, conn: &mut Connection, tournament_id: TournamentId) -> Result<PointsSummary, ScoringError> {
        let tx = conn
            .transaction()
            .map_err(|e| ScoringError::storage(e.into()))?;

        let summary = ScoringEngine::new(SqliteStore::new(&tx), &self.config.scoring)
            .compute_points(tournament_id)
            .inspect_err(|e| error!("Points run for tournament {} failed: {}", tournament_id, e))?;

        tx.commit().map_err(|e| ScoringError::storage(e.into()))?;

        info!(
            "Tournament {}: {} points and {} skins across {} teams",
            tournament_id, summary.points_calculated, summary.skins_awarded, summary.teams_scored
        );
        Ok(summary)
    }

    /// Resolves the tournament to score: the given id, or the active one.
    pub fn resolve_tournament(&self, conn: &Connection, tournament_id: Option<TournamentId>) -> Result<TournamentId> {
        if let Some(id) = tournament_id {
            return Ok(id);
        }

        database::tournaments::find_active(conn)?
            .map(|t| t.id)
            .ok_or_else(|| anyhow!("No tournament id given and no tournament is active"))
    }
}
