use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{GolferResult, TournamentId};

pub fn upsert_result(conn: &Connection, result: &GolferResult) -> Result<()> {
    let sql = "INSERT INTO golfer_results (tournament_id, golfer_id, position, is_cut, is_wd, match_play_wins, earnings, fedex_points, skin_count) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        ON CONFLICT(tournament_id, golfer_id) DO UPDATE SET position = excluded.position, is_cut = excluded.is_cut, is_wd = excluded.is_wd, match_play_wins = excluded.match_play_wins, earnings = excluded.earnings, fedex_points = excluded.fedex_points, skin_count = excluded.skin_count";

    conn.execute(
        sql,
        params![
            result.tournament_id,
            result.golfer_id,
            result.position,
            result.is_cut,
            result.is_wd,
            result.match_play_wins,
            result.earnings,
            result.fedex_points,
            result.skin_count
        ],
    )
    .with_context(|| {
        format!(
            "Failed to upsert result for golfer {} in tournament {}",
            result.golfer_id, result.tournament_id
        )
    })?;

    Ok(())
}

fn parse_result_row(row: &rusqlite::Row) -> rusqlite::Result<GolferResult> {
    Ok(GolferResult {
        tournament_id: row.get(0)?,
        golfer_id: row.get(1)?,
        position: row.get(2)?,
        is_cut: row.get(3)?,
        is_wd: row.get(4)?,
        match_play_wins: row.get(5)?,
        earnings: row.get(6)?,
        fedex_points: row.get(7)?,
        skin_count: row.get(8)?,
    })
}

pub fn list_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<GolferResult>> {
    let sql = "SELECT tournament_id, golfer_id, position, is_cut, is_wd, match_play_wins, earnings, fedex_points, skin_count FROM golfer_results WHERE tournament_id = ?1 ORDER BY golfer_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_result_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list golfer results")?;

    Ok(rows)
}
