pub mod settings;

pub use settings::{AppConfig, PointsTier, ScoringSettings, ServerSettings};
