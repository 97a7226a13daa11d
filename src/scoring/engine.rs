use log::{debug, info};
use serde::Serialize;

use super::error::ScoringError;
use super::points::{field_skins, tally_teams, ScoringFormat};
use super::store::ScoringStore;
use crate::config::ScoringSettings;
use crate::domain::{GolferResult, SkinsUpdate, Tournament, TournamentId};

/// Outcome of one successful points run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsSummary {
    pub tournament_id: TournamentId,
    pub teams_scored: usize,
    pub points_calculated: i64,
    pub skins_awarded: i64,
    pub carry_over_set: bool,
}

/// Computes team points and skins for one tournament and writes them back
/// through the store.
pub struct ScoringEngine<'a, S: ScoringStore> {
    store: S,
    settings: &'a ScoringSettings,
}

impl<'a, S: ScoringStore> ScoringEngine<'a, S> {
    pub fn new(store: S, settings: &'a ScoringSettings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn compute_points(&mut self, tournament_id: TournamentId) -> Result<PointsSummary, ScoringError> {
        let tournament = self
            .store
            .find_tournament(tournament_id)
            .map_err(ScoringError::storage)?
            .ok_or(ScoringError::NotFound(tournament_id))?;

        let format = ScoringFormat::of(&tournament);
        info!(
            "Computing points for tournament {} ({}) as {:?}{}",
            tournament.id,
            tournament.name,
            format.kind,
            if format.match_play { " match play" } else { "" }
        );

        let results = self
            .store
            .list_results(tournament_id)
            .map_err(ScoringError::storage)?;
        let lineups = self
            .store
            .list_lineups(tournament_id)
            .map_err(ScoringError::storage)?;
        info!("  → {} results, {} lineup entries", results.len(), lineups.len());

        let team_totals = tally_teams(&results, &lineups, &format, self.settings);

        let mut summary = PointsSummary {
            tournament_id,
            teams_scored: 0,
            points_calculated: 0,
            skins_awarded: 0,
            carry_over_set: false,
        };

        for totals in &team_totals {
            self.store
                .upsert_team_points(totals)
                .map_err(ScoringError::storage)?;
            debug!(
                "  team {}: {} points, {} skins",
                totals.team_id, totals.points, totals.skin_count
            );

            summary.teams_scored += 1;
            summary.points_calculated += i64::from(totals.points);
            summary.skins_awarded += i64::from(totals.skin_count);
        }
        info!("  → Scored {} teams", summary.teams_scored);

        summary.carry_over_set = self.update_carry_over(&tournament, &results)?;

        Ok(summary)
    }

    /// Marks the pot as rolling forward when nobody in the field won a skin.
    /// A claimed pot leaves the flag exactly as it was.
    fn update_carry_over(&mut self, tournament: &Tournament, results: &[GolferResult]) -> Result<bool, ScoringError> {
        let skins_in_field = field_skins(results);
        if skins_in_field > 0 {
            info!("  → {} skins won in the field, carry-over untouched", skins_in_field);
            return Ok(false);
        }

        let already_carrying = self
            .store
            .find_skins(tournament.id)
            .map_err(ScoringError::storage)?
            .is_some_and(|s| s.carry_over);

        self.store
            .update_skins(tournament.id, &SkinsUpdate::carry_over(true))
            .map_err(ScoringError::storage)?;
        if already_carrying {
            info!("  → No skins won, carry-over already set");
        } else {
            info!("  → No skins won, pot carries over");
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use anyhow::{bail, Result};
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{TeamId, TeamLineup, TeamPoints, TournamentSkins};

    #[derive(Default)]
    struct MemoryStore {
        tournaments: Vec<Tournament>,
        results: Vec<GolferResult>,
        lineups: Vec<TeamLineup>,
        skins: BTreeMap<TournamentId, TournamentSkins>,
        team_points: BTreeMap<(TeamId, TournamentId), TeamPoints>,
        fail_upserts_after: Option<usize>,
        upserts: usize,
    }

    impl ScoringStore for MemoryStore {
        fn find_tournament(&self, id: TournamentId) -> Result<Option<Tournament>> {
            Ok(self.tournaments.iter().find(|t| t.id == id).cloned())
        }

        fn list_results(&self, tournament_id: TournamentId) -> Result<Vec<GolferResult>> {
            Ok(self.results.iter().filter(|r| r.tournament_id == tournament_id).cloned().collect())
        }

        fn list_lineups(&self, tournament_id: TournamentId) -> Result<Vec<TeamLineup>> {
            Ok(self.lineups.iter().filter(|l| l.tournament_id == tournament_id).cloned().collect())
        }

        fn find_skins(&self, tournament_id: TournamentId) -> Result<Option<TournamentSkins>> {
            Ok(self.skins.get(&tournament_id).cloned())
        }

        fn upsert_team_points(&mut self, points: &TeamPoints) -> Result<()> {
            if self.fail_upserts_after.is_some_and(|limit| self.upserts >= limit) {
                bail!("connection reset");
            }
            self.upserts += 1;
            self.team_points
                .insert((points.team_id, points.tournament_id), points.clone());
            Ok(())
        }

        fn update_skins(&mut self, tournament_id: TournamentId, update: &SkinsUpdate) -> Result<()> {
            let row = self.skins.entry(tournament_id).or_insert(TournamentSkins {
                tournament_id,
                skin_value: 0.0,
                carry_over: false,
            });
            update.apply_to(row);
            Ok(())
        }
    }

    fn tournament(id: TournamentId, is_major: bool, is_wgc: bool, is_match_play: bool) -> Tournament {
        Tournament {
            id,
            name: format!("Event {id}"),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 11).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 14).unwrap(),
            is_major,
            is_wgc,
            is_match_play,
            is_active: true,
        }
    }

    fn result(tournament_id: TournamentId, golfer_id: i64, position: Option<i32>, skin_count: i32) -> GolferResult {
        GolferResult {
            tournament_id,
            golfer_id,
            position,
            is_cut: false,
            is_wd: false,
            match_play_wins: 0,
            earnings: 0.0,
            fedex_points: 0.0,
            skin_count,
        }
    }

    fn lineup(team_id: TeamId, tournament_id: TournamentId, golfer_id: i64) -> TeamLineup {
        TeamLineup { team_id, tournament_id, golfer_id }
    }

    #[test]
    fn test_major_winner_end_to_end() {
        let settings = ScoringSettings::default();
        let store = MemoryStore {
            tournaments: vec![tournament(1, true, false, false)],
            results: vec![result(1, 100, Some(1), 2)],
            lineups: vec![lineup(7, 1, 100)],
            ..MemoryStore::default()
        };

        let mut engine = ScoringEngine::new(store, &settings);
        let summary = engine.compute_points(1).unwrap();

        assert_eq!(summary.points_calculated, 200);
        assert_eq!(summary.skins_awarded, 2);
        let row = &engine.store().team_points[&(7, 1)];
        assert_eq!((row.points, row.skin_count), (200, 2));
    }

    #[test]
    fn test_unknown_tournament_writes_nothing() {
        let settings = ScoringSettings::default();
        let mut engine = ScoringEngine::new(MemoryStore::default(), &settings);

        let err = engine.compute_points(42).unwrap_err();

        assert!(err.is_not_found());
        assert!(engine.store().team_points.is_empty());
        assert!(engine.store().skins.is_empty());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let settings = ScoringSettings::default();
        let store = MemoryStore {
            tournaments: vec![tournament(1, false, true, false)],
            results: vec![result(1, 100, Some(5), 0), result(1, 101, Some(12), 1)],
            lineups: vec![lineup(7, 1, 100), lineup(7, 1, 101), lineup(8, 1, 101)],
            ..MemoryStore::default()
        };

        let mut engine = ScoringEngine::new(store, &settings);
        let first = engine.compute_points(1).unwrap();
        let rows_after_first = engine.store().team_points.clone();
        let second = engine.compute_points(1).unwrap();

        assert_eq!(first, second);
        assert_eq!(rows_after_first, engine.store().team_points);
        assert_eq!(engine.store().team_points[&(7, 1)].points, 45 + 15);
    }

    #[test]
    fn test_team_without_lineup_gets_no_row() {
        let settings = ScoringSettings::default();
        let store = MemoryStore {
            tournaments: vec![tournament(1, false, false, false), tournament(2, false, false, false)],
            results: vec![result(1, 100, Some(1), 0), result(2, 100, Some(2), 0)],
            lineups: vec![lineup(7, 1, 100), lineup(8, 2, 100)],
            ..MemoryStore::default()
        };

        let mut engine = ScoringEngine::new(store, &settings);
        let summary = engine.compute_points(1).unwrap();

        assert_eq!(summary.teams_scored, 1);
        assert!(engine.store().team_points.contains_key(&(7, 1)));
        assert!(!engine.store().team_points.contains_key(&(8, 1)));
    }

    #[test]
    fn test_stale_rows_are_kept_for_teams_not_in_lineup() {
        let settings = ScoringSettings::default();
        let mut store = MemoryStore {
            tournaments: vec![tournament(1, false, false, false)],
            results: vec![result(1, 100, Some(1), 0)],
            lineups: vec![lineup(7, 1, 100)],
            ..MemoryStore::default()
        };
        store.team_points.insert(
            (9, 1),
            TeamPoints { team_id: 9, tournament_id: 1, points: 33, skin_count: 1 },
        );

        let mut engine = ScoringEngine::new(store, &settings);
        engine.compute_points(1).unwrap();

        assert_eq!(engine.store().team_points[&(9, 1)].points, 33);
    }

    #[test]
    fn test_no_lineups_is_not_an_error() {
        let settings = ScoringSettings::default();
        let store = MemoryStore {
            tournaments: vec![tournament(1, false, false, false)],
            results: vec![result(1, 100, Some(1), 1)],
            ..MemoryStore::default()
        };

        let mut engine = ScoringEngine::new(store, &settings);
        let summary = engine.compute_points(1).unwrap();

        assert_eq!(summary.teams_scored, 0);
        assert_eq!(summary.points_calculated, 0);
        assert!(engine.store().team_points.is_empty());
    }

    #[test]
    fn test_zero_skins_sets_carry_over() {
        let settings = ScoringSettings::default();
        let mut store = MemoryStore {
            tournaments: vec![tournament(1, false, false, false)],
            results: vec![result(1, 100, Some(1), 0)],
            lineups: vec![lineup(7, 1, 100)],
            ..MemoryStore::default()
        };
        store.skins.insert(1, TournamentSkins { tournament_id: 1, skin_value: 500.0, carry_over: false });

        let mut engine = ScoringEngine::new(store, &settings);
        let summary = engine.compute_points(1).unwrap();

        assert!(summary.carry_over_set);
        let skins = &engine.store().skins[&1];
        assert!(skins.carry_over);
        assert_eq!(skins.skin_value, 500.0);
    }

    #[test]
    fn test_zero_skins_on_carrying_pot_keeps_it_carrying() {
        let settings = ScoringSettings::default();
        let mut store = MemoryStore {
            tournaments: vec![tournament(1, false, false, false)],
            results: vec![result(1, 100, Some(3), 0)],
            lineups: vec![lineup(7, 1, 100)],
            ..MemoryStore::default()
        };
        store.skins.insert(1, TournamentSkins { tournament_id: 1, skin_value: 250.0, carry_over: true });

        let mut engine = ScoringEngine::new(store, &settings);
        let summary = engine.compute_points(1).unwrap();

        assert!(summary.carry_over_set);
        assert_eq!(engine.store().skins[&1], TournamentSkins { tournament_id: 1, skin_value: 250.0, carry_over: true });
    }

    #[test]
    fn test_claimed_skins_leave_carry_over_alone() {
        let settings = ScoringSettings::default();
        let mut store = MemoryStore {
            tournaments: vec![tournament(1, false, false, false)],
            // Skin won by a golfer nobody fielded still counts as claimed.
            results: vec![result(1, 100, Some(1), 0), result(1, 101, Some(30), 1)],
            lineups: vec![lineup(7, 1, 100)],
            ..MemoryStore::default()
        };
        store.skins.insert(1, TournamentSkins { tournament_id: 1, skin_value: 500.0, carry_over: true });

        let mut engine = ScoringEngine::new(store, &settings);
        let summary = engine.compute_points(1).unwrap();

        assert!(!summary.carry_over_set);
        assert_eq!(summary.skins_awarded, 0);
        assert!(engine.store().skins[&1].carry_over);
    }

    #[test]
    fn test_match_play_major() {
        let settings = ScoringSettings::default();
        let mut r = result(1, 100, None, 0);
        r.match_play_wins = 3;
        let store = MemoryStore {
            tournaments: vec![tournament(1, true, false, true)],
            results: vec![r],
            lineups: vec![lineup(7, 1, 100)],
            ..MemoryStore::default()
        };

        let mut engine = ScoringEngine::new(store, &settings);
        engine.compute_points(1).unwrap();

        assert_eq!(engine.store().team_points[&(7, 1)].points, 6);
    }

    #[test]
    fn test_storage_failure_aborts_run() {
        let settings = ScoringSettings::default();
        let store = MemoryStore {
            tournaments: vec![tournament(1, false, false, false)],
            results: vec![result(1, 100, Some(1), 0)],
            lineups: vec![lineup(7, 1, 100), lineup(8, 1, 100)],
            fail_upserts_after: Some(1),
            ..MemoryStore::default()
        };

        let mut engine = ScoringEngine::new(store, &settings);
        let err = engine.compute_points(1).unwrap_err();

        assert!(matches!(err, ScoringError::Storage(_)));
        assert!(err.to_string().contains("connection reset"));
        assert_eq!(engine.store().team_points.len(), 1);
        assert!(engine.store().skins.is_empty());
    }
}
