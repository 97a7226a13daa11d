use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::StandingRow;
use crate::domain::{TeamPoints, TournamentId};

/// Writes a team's totals for a tournament, replacing any earlier calculation.
pub fn upsert_team_points(conn: &Connection, points: &TeamPoints) -> Result<()> {
    let sql = "INSERT INTO team_points (team_id, tournament_id, points, skin_count) VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(team_id, tournament_id) DO UPDATE SET points = excluded.points, skin_count = excluded.skin_count, calculated_at = CURRENT_TIMESTAMP";

    conn.execute(
        sql,
        params![points.team_id, points.tournament_id, points.points, points.skin_count],
    )
    .with_context(|| {
        format!(
            "Failed to upsert points for team {} in tournament {}",
            points.team_id, points.tournament_id
        )
    })?;

    Ok(())
}

pub fn list_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<TeamPoints>> {
    let sql = "SELECT team_id, tournament_id, points, skin_count FROM team_points WHERE tournament_id = ?1 ORDER BY points DESC, team_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(TeamPoints {
                team_id: row.get(0)?,
                tournament_id: row.get(1)?,
                points: row.get(2)?,
                skin_count: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list team points")?;

    Ok(rows)
}

/// Season totals for every team that has been scored at least once.
pub fn list_standings(conn: &Connection) -> Result<Vec<StandingRow>> {
    let sql = "
        SELECT
            t.id,
            t.name,
            t.owner,
            SUM(tp.points) AS total_points,
            SUM(tp.skin_count) AS total_skins,
            COUNT(tp.tournament_id) AS tournaments_scored
        FROM team_points tp
        JOIN teams t ON tp.team_id = t.id
        GROUP BY t.id, t.name, t.owner
        ORDER BY total_points DESC, total_skins DESC, t.name ASC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(StandingRow {
                team_id: row.get(0)?,
                team_name: row.get(1)?,
                owner: row.get(2)?,
                total_points: row.get(3)?,
                total_skins: row.get(4)?,
                tournaments_scored: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to compute standings")?;

    Ok(rows)
}
