use anyhow::Result;

use tennis_calculator::cli::Command;
use tennis_calculator::{
    handle_completions, handle_export, handle_games, handle_query, handle_score, interpret,
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
        Command::Query { source } => handle_query(source),
        Command::Score { source, match_id } => handle_score(source, match_id),
        Command::Games { source, player } => handle_games(source, player),
        Command::Export { source } => handle_export(source),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
