use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::Golfer;

pub fn upsert_golfer(conn: &Connection, golfer: &Golfer) -> Result<()> {
    let sql = "INSERT INTO golfers (id, name) VALUES (?1, ?2) ON CONFLICT(id) DO UPDATE SET name = excluded.name";

    conn.execute(sql, params![golfer.id, golfer.name])
        .with_context(|| format!("Failed to upsert golfer {}", golfer.id))?;
    Ok(())
}
