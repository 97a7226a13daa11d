use anyhow::Result;
use rusqlite::Connection;

use crate::database;
use crate::domain::{
    GolferResult, SkinsUpdate, TeamLineup, TeamPoints, Tournament, TournamentId, TournamentSkins,
};

/// Everything the scoring engine reads and writes.
pub trait ScoringStore {
    fn find_tournament(&self, id: TournamentId) -> Result<Option<Tournament>>;
    fn list_results(&self, tournament_id: TournamentId) -> Result<Vec<GolferResult>>;
    fn list_lineups(&self, tournament_id: TournamentId) -> Result<Vec<TeamLineup>>;
    fn find_skins(&self, tournament_id: TournamentId) -> Result<Option<TournamentSkins>>;
    fn upsert_team_points(&mut self, points: &TeamPoints) -> Result<()>;
    fn update_skins(&mut self, tournament_id: TournamentId, update: &SkinsUpdate) -> Result<()>;
}

/// SQLite-backed store. Borrowing a plain `Connection` lets callers hand in
/// a `Transaction` to make the whole run atomic.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl ScoringStore for SqliteStore<'_> {
    fn find_tournament(&self, id: TournamentId) -> Result<Option<Tournament>> {
        database::tournaments::find_by_id(self.conn, id)
    }

    fn list_results(&self, tournament_id: TournamentId) -> Result<Vec<GolferResult>> {
        database::results::list_by_tournament(self.conn, tournament_id)
    }

    fn list_lineups(&self, tournament_id: TournamentId) -> Result<Vec<TeamLineup>> {
        database::lineups::list_by_tournament(self.conn, tournament_id)
    }

    fn find_skins(&self, tournament_id: TournamentId) -> Result<Option<TournamentSkins>> {
        database::skins::find_by_tournament(self.conn, tournament_id)
    }

    fn upsert_team_points(&mut self, points: &TeamPoints) -> Result<()> {
        database::team_points::upsert_team_points(self.conn, points)
    }

    fn update_skins(&mut self, tournament_id: TournamentId, update: &SkinsUpdate) -> Result<()> {
        database::skins::update_skins(self.conn, tournament_id, update)
    }
}
