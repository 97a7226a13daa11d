use serde::Serialize;

use crate::domain::{TeamId, TeamPoints, TournamentSkins};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinPayout {
    pub team_id: TeamId,
    pub skins: i32,
    pub amount: f64,
}

/// Pot available for the last tournament in `history` (oldest first): its own
/// skin value plus every directly preceding pot still marked as carrying over.
pub fn accumulated_pot(history: &[Option<TournamentSkins>]) -> f64 {
    let Some((current, earlier)) = history.split_last() else {
        return 0.0;
    };

    let own = current.as_ref().map(|s| s.skin_value).unwrap_or(0.0);

    let carried: f64 = earlier
        .iter()
        .rev()
        .map_while(|skins| skins.as_ref().filter(|s| s.carry_over))
        .map(|s| s.skin_value)
        .sum();

    own + carried
}

/// Splits the pot between teams in proportion to the skins they claimed.
/// Nothing is paid when no team claimed a skin.
pub fn split_pot(pot: f64, claims: &[TeamPoints]) -> Vec<SkinPayout> {
    let total: i64 = claims.iter().map(|c| i64::from(c.skin_count.max(0))).sum();
    if total == 0 {
        return Vec::new();
    }

    let per_skin = pot / total as f64;

    claims
        .iter()
        .filter(|c| c.skin_count > 0)
        .map(|c| SkinPayout {
            team_id: c.team_id,
            skins: c.skin_count,
            amount: round_cents(per_skin * f64::from(c.skin_count)),
        })
        .collect()
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
