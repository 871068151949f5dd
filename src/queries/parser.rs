use anyhow::{Context, Result};
use regex::Regex;

use crate::errors::QueryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    ScoreMatch { match_id: String },
    GamesPlayer { player_name: String },
    Quit,
}

/// Recognises console commands, ignoring case and extra whitespace
pub struct QueryParser {
    score_match: Regex,
    games_player: Regex,
    quit: Regex,
}

impl QueryParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            score_match: compile(r"(?i)^score\s+match(?:\s+(.*))?$")?,
            games_player: compile(r"(?i)^games\s+player(?:\s+(.*))?$")?,
            quit: compile(r"(?i)^quit$")?,
        })
    }

    pub fn parse(&self, input: &str) -> Result<Query, QueryError> {
        let input = input.trim();

        if self.quit.is_match(input) {
            return Ok(Query::Quit);
        }

        if let Some(captures) = self.score_match.captures(input) {
            let match_id = argument(captures.get(1)).ok_or(QueryError::EmptyMatchId)?;
            return Ok(Query::ScoreMatch { match_id });
        }

        if let Some(captures) = self.games_player.captures(input) {
            let player_name = argument(captures.get(1)).ok_or(QueryError::EmptyPlayerName)?;
            return Ok(Query::GamesPlayer { player_name });
        }

        Err(QueryError::Unrecognised)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("Failed to compile query pattern {}", pattern))
}

fn argument(capture: Option<regex::Match<'_>>) -> Option<String> {
    capture
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Query, QueryError> {
        QueryParser::new().unwrap().parse(input)
    }

    #[test]
    fn test_score_match() {
        assert_eq!(
            parse("Score Match 02"),
            Ok(Query::ScoreMatch {
                match_id: "02".to_string()
            })
        );
        assert_eq!(
            parse("  score   MATCH   a b  "),
            Ok(Query::ScoreMatch {
                match_id: "a b".to_string()
            })
        );
    }

    #[test]
    fn test_games_player() {
        assert_eq!(
            parse("Games Player Person A"),
            Ok(Query::GamesPlayer {
                player_name: "Person A".to_string()
            })
        );
    }

    #[test]
    fn test_quit() {
        assert_eq!(parse("QUIT"), Ok(Query::Quit));
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(parse("Score Match"), Err(QueryError::EmptyMatchId));
        assert_eq!(parse("Games Player   "), Err(QueryError::EmptyPlayerName));
    }

    #[test]
    fn test_unrecognised() {
        assert_eq!(parse("Score 02"), Err(QueryError::Unrecognised));
        assert_eq!(parse("Score Matches 02"), Err(QueryError::Unrecognised));
        assert_eq!(parse("quit now"), Err(QueryError::Unrecognised));
    }
}
