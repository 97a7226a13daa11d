/// A contiguous run of finishing positions that share a points value.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsTier {
    pub first: i32,
    pub last: i32,
    pub points: i32,
}

impl PointsTier {
    pub const fn new(first: i32, last: i32, points: i32) -> Self {
        Self { first, last, points }
    }

    pub fn contains(&self, position: i32) -> bool {
        position >= self.first && position <= self.last
    }
}

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub points_table: Vec<PointsTier>,
    pub major_multiplier: f64,
    pub wgc_multiplier: f64,
    pub cut_penalty: i32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            points_table: vec![
                PointsTier::new(1, 1, 100),
                PointsTier::new(2, 2, 70),
                PointsTier::new(3, 3, 50),
                PointsTier::new(4, 4, 40),
                PointsTier::new(5, 5, 30),
                PointsTier::new(6, 10, 20),
                PointsTier::new(11, 15, 10),
                PointsTier::new(16, 20, 5),
            ],
            major_multiplier: 2.0,
            wgc_multiplier: 1.5,
            cut_penalty: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
    pub admin_token: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: "golf_league.db".to_string(),
            admin_token: "secret".to_string(),
        }
    }
}

impl ServerSettings {
    /// Reads `DATABASE_PATH` and `ADMIN_TOKEN`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            admin_token: std::env::var("ADMIN_TOKEN").unwrap_or(defaults.admin_token),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            server: ServerSettings::from_env(),
        }
    }
}
