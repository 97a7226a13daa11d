use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::models::{Golfer, GolferResult, Team, TeamLineup, Tournament, TournamentSkins};

/// Snapshot of league data as exchanged in JSON import files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueFile {
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub golfers: Vec<Golfer>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub results: Vec<GolferResult>,
    #[serde(default)]
    pub lineups: Vec<TeamLineup>,
    #[serde(default)]
    pub skins: Vec<TournamentSkins>,
}

impl LeagueFile {
    pub fn validate(&self) -> Result<()> {
        self.check_single_active()?;
        self.check_references()?;
        self.check_dates()
    }

    fn check_single_active(&self) -> Result<()> {
        let active: Vec<_> = self
            .tournaments
            .iter()
            .filter(|t| t.is_active)
            .map(|t| t.id)
            .collect();

        if active.len() > 1 {
            bail!("At most one tournament may be active, found {:?}", active);
        }
        Ok(())
    }

    fn check_dates(&self) -> Result<()> {
        for tournament in &self.tournaments {
            if tournament.end_date < tournament.start_date {
                bail!(
                    "Tournament {} ends ({}) before it starts ({})",
                    tournament.id,
                    tournament.end_date,
                    tournament.start_date
                );
            }
        }
        Ok(())
    }

    fn check_references(&self) -> Result<()> {
        let tournaments: HashSet<_> = self.tournaments.iter().map(|t| t.id).collect();
        let golfers: HashSet<_> = self.golfers.iter().map(|g| g.id).collect();
        let teams: HashSet<_> = self.teams.iter().map(|t| t.id).collect();

        for result in &self.results {
            if !tournaments.contains(&result.tournament_id) {
                bail!("Result references unknown tournament {}", result.tournament_id);
            }
            if !golfers.contains(&result.golfer_id) {
                bail!("Result references unknown golfer {}", result.golfer_id);
            }
        }

        for lineup in &self.lineups {
            if !teams.contains(&lineup.team_id) {
                bail!("Lineup references unknown team {}", lineup.team_id);
            }
            if !tournaments.contains(&lineup.tournament_id) {
                bail!("Lineup references unknown tournament {}", lineup.tournament_id);
            }
            if !golfers.contains(&lineup.golfer_id) {
                bail!("Lineup references unknown golfer {}", lineup.golfer_id);
            }
        }

        for skins in &self.skins {
            if !tournaments.contains(&skins.tournament_id) {
                bail!("Skins pot references unknown tournament {}", skins.tournament_id);
            }
        }

        Ok(())
    }
}
