pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod scoring;
pub mod services;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::setup::reset_database;
use crate::services::import::ImportService;
use crate::services::reports;
use crate::services::scoring::ScoringService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let conn = database::get_connection(&pool)?;
    reset_database(&conn)?;
    println!("{} {}", "Initialised".green(), config.server.database_path);
    Ok(())
}

pub fn handle_import(file: &Path) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let mut conn = database::get_connection(&pool)?;

    let stats = ImportService::import_file(&mut conn, file)?;
    println!(
        "{} {} tournaments, {} golfers, {} teams, {} results, {} lineup entries, {} skins pots",
        "Imported".green(),
        stats.tournaments,
        stats.golfers,
        stats.teams,
        stats.results,
        stats.lineups,
        stats.skins
    );
    Ok(())
}

pub fn handle_compute(tournament_id: Option<i64>) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let mut conn = database::get_connection(&pool)?;

    let service = ScoringService::new(config);
    let tournament_id = service.resolve_tournament(&conn, tournament_id)?;
    let summary = service.compute(&mut conn, tournament_id)?;

    println!(
        "{} tournament {}: {} points, {} skins across {} teams",
        "Scored".green().bold(),
        summary.tournament_id,
        summary.points_calculated,
        summary.skins_awarded,
        summary.teams_scored
    );
    if summary.carry_over_set {
        println!("{}", "No skins won this week, the pot carries over".yellow());
    }
    Ok(())
}

pub fn handle_standings() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let conn = database::get_connection(&pool)?;

    let standings = reports::standings(&conn)?;
    if standings.is_empty() {
        println!("{}", "No points have been calculated yet".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("{:>4}  {:<28} {:>8} {:>6} {:>6}", "Rank", "Team", "Points", "Skins", "Events")
            .as_str()
            .bold()
    );
    for row in standings {
        println!(
            "{:>4}  {:<28} {:>8} {:>6} {:>6}",
            row.rank, row.team_name, row.total_points, row.total_skins, row.tournaments_scored
        );
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
