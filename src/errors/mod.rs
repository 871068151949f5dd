use anyhow::Context as _;
use thiserror::Error;

/// Problems found while reading the tournament file format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid match header at line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },

    #[error("Missing players at line {line}: expected '<Player1> vs <Player2>'")]
    MissingPlayers { line: usize },

    #[error("Invalid point '{token}' at line {line}: expected 0, 1 or a new match")]
    InvalidPointToken { line: usize, token: String },

    #[error("Invalid player names at line {line}: players cannot both be named '{name}'")]
    DuplicatePlayerNames { line: usize, name: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedHeader { line, .. }
            | ParseError::MissingPlayers { line }
            | ParseError::InvalidPointToken { line, .. }
            | ParseError::DuplicatePlayerNames { line, .. } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Tournament file '{0}' not found or cannot be accessed")]
    SourceNotFound(String),

    #[error("Unsupported data source: '{0}'")]
    UnsupportedSource(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Error: Match ID cannot be empty")]
    EmptyMatchId,

    #[error("Error: Player name cannot be empty")]
    EmptyPlayerName,

    #[error("Error: Unrecognised command")]
    Unrecognised,
}

/// Add context to source read errors
pub fn read_context(location: &str) -> String {
    format!("Failed to read tournament data from: {}", location)
}

/// Add context to parse errors
pub fn parse_context(location: &str) -> String {
    format!("Failed to parse tournament data from: {}", location)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, location: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(read_context(location))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, location: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(location))
}
