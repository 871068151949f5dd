use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis match calculator")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Load a tournament file and answer queries interactively
    Query {
        /// Tournament file path, or '-' for standard input
        source: String,
    },
    /// Print the result of a single match
    Score {
        /// Tournament file path, or '-' for standard input
        source: String,
        /// Match ID
        match_id: String,
    },
    /// Print games won and lost by a player
    Games {
        /// Tournament file path, or '-' for standard input
        source: String,
        /// Player name
        player: String,
    },
    /// Print every processed match as JSON
    Export {
        /// Tournament file path, or '-' for standard input
        source: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
