pub mod connection;
pub mod golfers;
pub mod lineups;
pub mod models;
pub mod results;
pub mod setup;
pub mod skins;
pub mod team_points;
pub mod teams;
pub mod tournaments;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
