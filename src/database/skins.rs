use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{SkinsUpdate, Tournament, TournamentId, TournamentSkins};

fn parse_skins_row(row: &rusqlite::Row) -> rusqlite::Result<TournamentSkins> {
    Ok(TournamentSkins {
        tournament_id: row.get(0)?,
        skin_value: row.get(1)?,
        carry_over: row.get(2)?,
    })
}

pub fn find_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Option<TournamentSkins>> {
    let sql = "SELECT tournament_id, skin_value, carry_over FROM tournament_skins WHERE tournament_id = ?1";

    conn.query_row(sql, params![tournament_id], parse_skins_row)
        .optional()
        .context("Failed to query tournament skins")
}

pub fn upsert_skins(conn: &Connection, skins: &TournamentSkins) -> Result<()> {
    let sql = "INSERT INTO tournament_skins (tournament_id, skin_value, carry_over) VALUES (?1, ?2, ?3)
        ON CONFLICT(tournament_id) DO UPDATE SET skin_value = excluded.skin_value, carry_over = excluded.carry_over";

    conn.execute(sql, params![skins.tournament_id, skins.skin_value, skins.carry_over])
        .with_context(|| format!("Failed to upsert skins for tournament {}", skins.tournament_id))?;
    Ok(())
}

/// Applies a partial update. A missing row is created with defaults for the
/// fields the update leaves unchanged.
pub fn update_skins(conn: &Connection, tournament_id: TournamentId, update: &SkinsUpdate) -> Result<()> {
    if update.is_empty() {
        return Ok(());
    }

    let mut assignments = Vec::new();
    if update.skin_value.is_set() {
        assignments.push("skin_value = excluded.skin_value");
    }
    if update.carry_over.is_set() {
        assignments.push("carry_over = excluded.carry_over");
    }

    let sql = format!(
        "INSERT INTO tournament_skins (tournament_id, skin_value, carry_over) VALUES (?1, ?2, ?3) ON CONFLICT(tournament_id) DO UPDATE SET {}",
        assignments.join(", ")
    );

    conn.execute(
        &sql,
        params![
            tournament_id,
            update.skin_value.value_or(0.0),
            update.carry_over.value_or(false)
        ],
    )
    .with_context(|| format!("Failed to update skins for tournament {}", tournament_id))?;

    Ok(())
}

/// Skins rows for `tournament` and every tournament before it, oldest first.
/// Tournaments without a skins row yield `None`.
pub fn list_history_through(conn: &Connection, tournament: &Tournament) -> Result<Vec<Option<TournamentSkins>>> {
    let sql = "
        SELECT s.tournament_id, s.skin_value, s.carry_over
        FROM tournaments t
        LEFT JOIN tournament_skins s ON s.tournament_id = t.id
        WHERE t.start_date < ?1 OR (t.start_date = ?1 AND t.id <= ?2)
        ORDER BY t.start_date, t.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament.start_date, tournament.id], |row| {
            let tournament_id: Option<TournamentId> = row.get(0)?;
            match tournament_id {
                Some(tournament_id) => Ok(Some(TournamentSkins {
                    tournament_id,
                    skin_value: row.get(1)?,
                    carry_over: row.get(2)?,
                })),
                None => Ok(None),
            }
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list skins history")?;

    Ok(rows)
}
