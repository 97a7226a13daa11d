use std::collections::{BTreeMap, HashMap};

use crate::config::ScoringSettings;
use crate::domain::{GolferId, GolferResult, TeamId, TeamLineup, TeamPoints, Tournament};

/// Tournament tier for the purpose of the points multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentKind {
    Regular,
    Wgc,
    Major,
}

impl TournamentKind {
    /// Major wins when a tournament carries both flags.
    pub fn of(tournament: &Tournament) -> Self {
        if tournament.is_major {
            TournamentKind::Major
        } else if tournament.is_wgc {
            TournamentKind::Wgc
        } else {
            TournamentKind::Regular
        }
    }

    pub fn multiplier(&self, settings: &ScoringSettings) -> f64 {
        match self {
            TournamentKind::Regular => 1.0,
            TournamentKind::Wgc => settings.wgc_multiplier,
            TournamentKind::Major => settings.major_multiplier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringFormat {
    pub kind: TournamentKind,
    pub match_play: bool,
}

impl ScoringFormat {
    pub fn of(tournament: &Tournament) -> Self {
        Self {
            kind: TournamentKind::of(tournament),
            match_play: tournament.is_match_play,
        }
    }
}

/// Table points for a finishing position. Unknown, zero or negative
/// positions and anything past the last tier score nothing.
pub fn position_points(position: Option<i32>, settings: &ScoringSettings) -> i32 {
    let Some(position) = position.filter(|p| *p > 0) else {
        return 0;
    };

    settings
        .points_table
        .iter()
        .find(|tier| tier.contains(position))
        .map(|tier| tier.points)
        .unwrap_or(0)
}

pub fn base_points(result: &GolferResult, format: &ScoringFormat, settings: &ScoringSettings) -> i32 {
    if format.match_play {
        result.match_play_wins
    } else {
        position_points(result.position, settings)
    }
}

/// Points a single golfer earns for the fielding team. The multiplier is
/// applied before rounding and the cut penalty after, so the penalty is never
/// scaled. May be negative. Saturates at the `i32` bounds.
pub fn golfer_points(result: &GolferResult, format: &ScoringFormat, settings: &ScoringSettings) -> i32 {
    let base = base_points(result, format, settings);
    // float-to-int `as` saturates
    let scaled = (f64::from(base) * format.kind.multiplier(settings)).round() as i32;

    if result.is_cut {
        scaled.saturating_sub(settings.cut_penalty)
    } else {
        scaled
    }
}

/// Sums golfer points and skins per team over each team's lineup. Golfers
/// without a recorded result count as zero. Output is ordered by team id.
pub fn tally_teams(
    results: &[GolferResult],
    lineups: &[TeamLineup],
    format: &ScoringFormat,
    settings: &ScoringSettings,
) -> Vec<TeamPoints> {
    let by_golfer: HashMap<GolferId, &GolferResult> =
        results.iter().map(|r| (r.golfer_id, r)).collect();

    let mut totals: BTreeMap<TeamId, TeamPoints> = BTreeMap::new();

    for lineup in lineups {
        let entry = totals.entry(lineup.team_id).or_insert_with(|| TeamPoints {
            team_id: lineup.team_id,
            tournament_id: lineup.tournament_id,
            points: 0,
            skin_count: 0,
        });

        if let Some(result) = by_golfer.get(&lineup.golfer_id) {
            entry.points = entry.points.saturating_add(golfer_points(result, format, settings));
            entry.skin_count = entry.skin_count.saturating_add(result.skin_count);
        }
    }

    totals.into_values().collect()
}

/// Skins won by every golfer in the field, whether or not anyone fielded them.
pub fn field_skins(results: &[GolferResult]) -> i64 {
    results.iter().map(|r| i64::from(r.skin_count)).sum()
}
