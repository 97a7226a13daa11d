use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Tournament, TournamentId};

const COLUMNS: &str = "id, name, start_date, end_date, is_major, is_wgc, is_match_play, is_active";

pub fn upsert_tournament(conn: &Connection, tournament: &Tournament) -> Result<()> {
    let sql = "INSERT INTO tournaments (id, name, start_date, end_date, is_major, is_wgc, is_match_play, is_active) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        ON CONFLICT(id) DO UPDATE SET name = excluded.name, start_date = excluded.start_date, end_date = excluded.end_date, is_major = excluded.is_major, is_wgc = excluded.is_wgc, is_match_play = excluded.is_match_play, is_active = excluded.is_active";

    conn.execute(
        sql,
        params![
            tournament.id,
            tournament.name,
            tournament.start_date,
            tournament.end_date,
            tournament.is_major,
            tournament.is_wgc,
            tournament.is_match_play,
            tournament.is_active
        ],
    )
    .with_context(|| format!("Failed to upsert tournament {}", tournament.id))?;

    Ok(())
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        is_major: row.get(4)?,
        is_wgc: row.get(5)?,
        is_match_play: row.get(6)?,
        is_active: row.get(7)?,
    })
}

pub fn find_by_id(conn: &Connection, id: TournamentId) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {COLUMNS} FROM tournaments WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn find_active(conn: &Connection) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {COLUMNS} FROM tournaments WHERE is_active = 1 LIMIT 1");

    conn.query_row(&sql, [], parse_tournament_row)
        .optional()
        .context("Failed to query active tournament")
}

/// All tournaments in calendar order.
pub fn list_all(conn: &Connection) -> Result<Vec<Tournament>> {
    let sql = format!("SELECT {COLUMNS} FROM tournaments ORDER BY start_date, id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Clears the active flag on every tournament except `id`.
pub fn deactivate_others(conn: &Connection, id: TournamentId) -> Result<usize> {
    let sql = "UPDATE tournaments SET is_active = 0 WHERE id <> ?1 AND is_active = 1";

    conn.execute(sql, params![id])
        .context("Failed to deactivate other tournaments")
}
