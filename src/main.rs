use anyhow::Result;

use golf_league::cli::Command;
use golf_league::{
    handle_completions, handle_compute, handle_import, handle_init, handle_serve,
    handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Init => handle_init(),
        Command::Import { file } => handle_import(file),
        Command::Compute { tournament_id } => handle_compute(*tournament_id),
        Command::Standings => handle_standings(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
