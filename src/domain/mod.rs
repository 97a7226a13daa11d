pub mod league;
pub mod models;

pub use league::LeagueFile;
pub use models::*;
