use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Team;

pub fn upsert_team(conn: &Connection, team: &Team) -> Result<()> {
    let sql = "INSERT INTO teams (id, name, owner) VALUES (?1, ?2, ?3) ON CONFLICT(id) DO UPDATE SET name = excluded.name, owner = excluded.owner";

    conn.execute(sql, params![team.id, team.name, team.owner])
        .with_context(|| format!("Failed to upsert team {}", team.id))?;
    Ok(())
}
