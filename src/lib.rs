pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loaders;
pub mod processing;
pub mod queries;
pub mod scoring;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::io::{self, IsTerminal};

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::MatchCollection;
use crate::queries::{GamesPlayerHandler, ScoreMatchHandler};
use crate::services::{Console, ProcessingService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn load_matches(source: &str, config: &AppConfig) -> Result<MatchCollection> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ProcessingService::new(config);
        service.run(source).await
    })
}

pub fn handle_query(source: &str) -> Result<()> {
    let config = AppConfig::new();
    let matches = load_matches(source, &config)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let console = Console::new(&matches, config.console)?;
    console.run(stdin.lock(), &mut io::stdout(), interactive)
}

pub fn handle_score(source: &str, match_id: &str) -> Result<()> {
    let matches = load_matches(source, &AppConfig::new())?;
    println!("{}", ScoreMatchHandler::new(&matches).handle(match_id));
    Ok(())
}

pub fn handle_games(source: &str, player: &str) -> Result<()> {
    let matches = load_matches(source, &AppConfig::new())?;
    println!("{}", GamesPlayerHandler::new(&matches).handle(player));
    Ok(())
}

pub fn handle_export(source: &str) -> Result<()> {
    let matches = load_matches(source, &AppConfig::new())?;
    let all: Vec<_> = matches.iter().collect();
    let json = serde_json::to_string_pretty(&all).context("Failed to serialize matches")?;
    println!("{}", json);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
