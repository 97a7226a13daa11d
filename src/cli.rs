use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "fantasy golf league points and skins")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Drop and recreate the database schema
    Init,
    /// Load tournaments, golfers, teams, results and lineups from a JSON file
    Import {
        /// Path to the league JSON file
        file: PathBuf,
    },
    /// Calculate team points and skins for a tournament
    Compute {
        /// Tournament id (defaults to the active tournament)
        tournament_id: Option<i64>,
    },
    /// Print season standings
    Standings,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
