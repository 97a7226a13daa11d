use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type TournamentId = i64;
pub type GolferId = i64;
pub type TeamId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_major: bool,
    #[serde(default)]
    pub is_wgc: bool,
    #[serde(default)]
    pub is_match_play: bool,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Golfer {
    pub id: GolferId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub owner: String,
}

/// One golfer's outcome in one tournament. `position` is `None` when no
/// finish was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GolferResult {
    pub tournament_id: TournamentId,
    pub golfer_id: GolferId,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub is_cut: bool,
    #[serde(default)]
    pub is_wd: bool,
    #[serde(default)]
    pub match_play_wins: i32,
    #[serde(default)]
    pub earnings: f64,
    #[serde(default)]
    pub fedex_points: f64,
    #[serde(default)]
    pub skin_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLineup {
    pub team_id: TeamId,
    pub tournament_id: TournamentId,
    pub golfer_id: GolferId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPoints {
    pub team_id: TeamId,
    pub tournament_id: TournamentId,
    pub points: i32,
    pub skin_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSkins {
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub skin_value: f64,
    #[serde(default)]
    pub carry_over: bool,
}

/// A single field of a partial update: either left alone or overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Unchanged,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Patch::Set(value) => value,
            Patch::Unchanged => default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkinsUpdate {
    pub skin_value: Patch<f64>,
    pub carry_over: Patch<bool>,
}

impl SkinsUpdate {
    pub fn carry_over(value: bool) -> Self {
        Self {
            carry_over: Patch::Set(value),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.skin_value.is_set() && !self.carry_over.is_set()
    }

    /// Applies the set fields on top of an existing row.
    pub fn apply_to(&self, skins: &mut TournamentSkins) {
        if let Patch::Set(value) = self.skin_value {
            skins.skin_value = value;
        }
        if let Patch::Set(value) = self.carry_over {
            skins.carry_over = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skins_update_only_touches_set_fields() {
        let mut skins = TournamentSkins {
            tournament_id: 7,
            skin_value: 250.0,
            carry_over: false,
        };

        SkinsUpdate::carry_over(true).apply_to(&mut skins);

        assert_eq!(skins.skin_value, 250.0);
        assert!(skins.carry_over);
    }

    #[test]
    fn test_empty_update() {
        assert!(SkinsUpdate::default().is_empty());
        assert!(!SkinsUpdate::carry_over(false).is_empty());
    }

    #[test]
    fn test_result_defaults_when_deserializing() {
        let json = r#"{"tournamentId": 1, "golferId": 2, "position": 4}"#;
        let result: GolferResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.position, Some(4));
        assert!(!result.is_cut);
        assert_eq!(result.skin_count, 0);
    }
}
