use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rusqlite::Connection;

use crate::database;
use crate::domain::LeagueFile;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportStats {
    pub tournaments: usize,
    pub golfers: usize,
    pub teams: usize,
    pub results: usize,
    pub lineups: usize,
    pub skins: usize,
}

/// Loads a JSON league snapshot into the database.
pub struct ImportService;

impl ImportService {
    pub fn import_file(conn: &mut Connection, path: &Path) -> Result<ImportStats> {
        info!("=== Importing league data from {} ===", path.display());

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read league file {}", path.display()))?;
        let league: LeagueFile = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse league file {}", path.display()))?;

        let stats = Self::import_league(conn, &league)?;
        info!("=== Import Complete ===");
        Ok(stats)
    }

    /// Validates and upserts everything in one transaction.
    pub fn import_league(conn: &mut Connection, league: &LeagueFile) -> Result<ImportStats> {
        league.validate()?;

        let tx = conn.transaction().context("Failed to start import transaction")?;

        for tournament in &league.tournaments {
            database::tournaments::upsert_tournament(&tx, tournament)?;
        }
        info!("  → {} tournaments", league.tournaments.len());

        if let Some(active) = league.tournaments.iter().find(|t| t.is_active) {
            let cleared = database::tournaments::deactivate_others(&tx, active.id)?;
            if cleared > 0 {
                info!("  → Tournament {} is now active ({} deactivated)", active.id, cleared);
            }
        }

        for golfer in &league.golfers {
            database::golfers::upsert_golfer(&tx, golfer)?;
        }
        info!("  → {} golfers", league.golfers.len());

        for team in &league.teams {
            database::teams::upsert_team(&tx, team)?;
        }
        info!("  → {} teams", league.teams.len());

        for result in &league.results {
            database::results::upsert_result(&tx, result)?;
        }
        info!("  → {} results", league.results.len());

        // A lineup in the file replaces the team's whole lineup for that week.
        let replaced: BTreeSet<_> = league
            .lineups
            .iter()
            .map(|l| (l.team_id, l.tournament_id))
            .collect();
        for (team_id, tournament_id) in replaced {
            database::lineups::delete_for_team(&tx, team_id, tournament_id)?;
        }
        for lineup in &league.lineups {
            database::lineups::insert_lineup(&tx, lineup)?;
        }
        info!("  → {} lineup entries", league.lineups.len());

        for skins in &league.skins {
            database::skins::upsert_skins(&tx, skins)?;
        }
        info!("  → {} skins pots", league.skins.len());

        tx.commit().context("Failed to commit import")?;

        Ok(ImportStats {
            tournaments: league.tournaments.len(),
            golfers: league.golfers.len(),
            teams: league.teams.len(),
            results: league.results.len(),
            lineups: league.lineups.len(),
            skins: league.skins.len(),
        })
    }
}
