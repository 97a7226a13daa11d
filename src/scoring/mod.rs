pub mod engine;
pub mod error;
pub mod points;
pub mod skins;
pub mod store;

pub use engine::{PointsSummary, ScoringEngine};
pub use error::ScoringError;
pub use points::{golfer_points, position_points, ScoringFormat, TournamentKind};
pub use skins::{accumulated_pot, split_pot, SkinPayout};
pub use store::{ScoringStore, SqliteStore};
