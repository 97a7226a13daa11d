use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::database;
use crate::domain::{TeamId, TournamentId};
use crate::scoring::{accumulated_pot, split_pot, SkinPayout};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub rank: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub owner: String,
    pub total_points: i64,
    pub total_skins: i64,
    pub tournaments_scored: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinsReport {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub skin_value: f64,
    pub carry_over: bool,
    pub pot: f64,
    pub skins_claimed: i64,
    pub payouts: Vec<SkinPayout>,
}

pub fn standings(conn: &Connection) -> Result<Vec<Standing>> {
    let rows = database::team_points::list_standings(conn)?;

    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| Standing {
            rank: i + 1,
            team_id: row.team_id,
            team_name: row.team_name,
            owner: row.owner,
            total_points: row.total_points,
            total_skins: row.total_skins,
            tournaments_scored: row.tournaments_scored,
        })
        .collect())
}

/// Pot and per-team payouts for a tournament, or `None` if it does not exist.
pub fn skins_report(conn: &Connection, tournament_id: TournamentId) -> Result<Option<SkinsReport>> {
    let Some(tournament) = database::tournaments::find_by_id(conn, tournament_id)? else {
        return Ok(None);
    };

    let own = database::skins::find_by_tournament(conn, tournament_id)?;
    let history = database::skins::list_history_through(conn, &tournament)?;
    let claims = database::team_points::list_by_tournament(conn, tournament_id)?;

    let pot = accumulated_pot(&history);
    let payouts = split_pot(pot, &claims);

    Ok(Some(SkinsReport {
        tournament_id,
        tournament_name: tournament.name,
        skin_value: own.as_ref().map(|s| s.skin_value).unwrap_or(0.0),
        carry_over: own.as_ref().is_some_and(|s| s.carry_over),
        pot,
        skins_claimed: claims.iter().map(|c| i64::from(c.skin_count)).sum(),
        payouts,
    }))
}
