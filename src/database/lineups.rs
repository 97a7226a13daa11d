use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{TeamId, TeamLineup, TournamentId};

/// Records that a team fielded a golfer. Re-inserting the same triple is a no-op.
pub fn insert_lineup(conn: &Connection, lineup: &TeamLineup) -> Result<()> {
    let sql = "INSERT OR IGNORE INTO team_lineups (team_id, tournament_id, golfer_id) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![lineup.team_id, lineup.tournament_id, lineup.golfer_id])
        .context("Failed to insert lineup entry")?;
    Ok(())
}

pub fn list_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<TeamLineup>> {
    let sql = "SELECT team_id, tournament_id, golfer_id FROM team_lineups WHERE tournament_id = ?1 ORDER BY team_id, golfer_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(TeamLineup {
                team_id: row.get(0)?,
                tournament_id: row.get(1)?,
                golfer_id: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list team lineups")?;

    Ok(rows)
}

/// Removes a team's whole lineup for one tournament.
pub fn delete_for_team(conn: &Connection, team_id: TeamId, tournament_id: TournamentId) -> Result<()> {
    let sql = "DELETE FROM team_lineups WHERE team_id = ?1 AND tournament_id = ?2";

    conn.execute(sql, params![team_id, tournament_id])
        .context("Failed to clear team lineup")?;
    Ok(())
}
