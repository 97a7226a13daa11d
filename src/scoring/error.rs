use thiserror::Error;

use crate::domain::TournamentId;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Tournament {0} not found")]
    NotFound(TournamentId),

    #[error("Storage failure: {0:#}")]
    Storage(anyhow::Error),
}

impl ScoringError {
    pub fn storage(err: anyhow::Error) -> Self {
        ScoringError::Storage(err)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScoringError::NotFound(_))
    }
}
