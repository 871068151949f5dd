use log::debug;

use crate::domain::{PlayerKey, RawMatchData, Side};
use crate::errors::ParseError;

const MATCH_HEADER: &str = "match:";
const PLAYER_SEPARATOR: &str = " vs ";

/// Parser for tournament files, one match block at a time:
///
/// ```text
/// Match: 01
/// Person A vs Person B
/// 0
/// 1
/// ```
#[derive(Debug, Default)]
pub struct TournamentParser;

/// Where the parser is within the current match block
enum State {
    ExpectHeader,
    ExpectPlayers { match_id: String },
    Points(RawMatchData),
}

impl TournamentParser {
    pub fn new() -> Self {
        Self
    }

    /// Line numbers in errors are 1-based and count blank lines.
    pub fn parse<I, S>(&self, lines: I) -> Result<Vec<RawMatchData>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matches = Vec::new();
        let mut state = State::ExpectHeader;
        let mut line_number = 0;

        for line in lines {
            line_number += 1;
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            if let Some(match_id) = parse_header(line) {
                if match_id.is_empty() {
                    return Err(ParseError::MalformedHeader {
                        line: line_number,
                        reason: "Match ID cannot be empty".to_string(),
                    });
                }
                match state {
                    State::ExpectPlayers { .. } => {
                        return Err(ParseError::MissingPlayers { line: line_number });
                    }
                    State::Points(finished) => matches.push(finished),
                    State::ExpectHeader => {}
                }
                state = State::ExpectPlayers {
                    match_id: match_id.to_string(),
                };
                continue;
            }

            state = match state {
                State::ExpectHeader => {
                    return Err(ParseError::MalformedHeader {
                        line: line_number,
                        reason: format!("expected 'Match: <id>', found '{}'", line),
                    });
                }
                State::ExpectPlayers { match_id } => {
                    let (player_one, player_two) = parse_players(line, line_number)?;
                    State::Points(RawMatchData {
                        match_id,
                        player_one,
                        player_two,
                        points: Vec::new(),
                    })
                }
                State::Points(mut current) => {
                    current.points.push(parse_point(line, line_number)?);
                    State::Points(current)
                }
            };
        }

        match state {
            State::ExpectPlayers { .. } => {
                return Err(ParseError::MissingPlayers { line: line_number });
            }
            State::Points(last) => matches.push(last),
            State::ExpectHeader => {}
        }

        debug!("Parsed {} matches from {} lines", matches.len(), line_number);
        Ok(matches)
    }
}

/// Match ID of a `Match: <id>` line, compared case-insensitively
fn parse_header(line: &str) -> Option<&str> {
    let prefix = line.get(..MATCH_HEADER.len())?;
    if prefix.eq_ignore_ascii_case(MATCH_HEADER) {
        Some(line[MATCH_HEADER.len()..].trim())
    } else {
        None
    }
}

fn parse_players(line: &str, line_number: usize) -> Result<(String, String), ParseError> {
    let lowered = line.to_ascii_lowercase();
    let separators: Vec<usize> = lowered
        .match_indices(PLAYER_SEPARATOR)
        .map(|(idx, _)| idx)
        .collect();

    let [idx] = separators[..] else {
        return Err(ParseError::MissingPlayers { line: line_number });
    };

    let player_one = line[..idx].trim();
    let player_two = line[idx + PLAYER_SEPARATOR.len()..].trim();
    if player_one.is_empty() || player_two.is_empty() {
        return Err(ParseError::MissingPlayers { line: line_number });
    }

    if PlayerKey::new(player_one) == PlayerKey::new(player_two) {
        return Err(ParseError::DuplicatePlayerNames {
            line: line_number,
            name: player_one.to_string(),
        });
    }

    Ok((player_one.to_string(), player_two.to_string()))
}

fn parse_point(line: &str, line_number: usize) -> Result<u8, ParseError> {
    // a single digit only, so `+1` and `01` are rejected
    line.parse::<u8>()
        .ok()
        .filter(|&token| line.len() == 1 && Side::from_token(token).is_some())
        .ok_or_else(|| ParseError::InvalidPointToken {
            line: line_number,
            token: line.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<RawMatchData>, ParseError> {
        TournamentParser::new().parse(text.lines())
    }

    #[test]
    fn test_parse_two_matches() {
        let text = "Match: 01\nPerson A vs Person B\n0\n1\n0\n\nMatch: 02\nPerson A vs Person C\n1\n";
        let matches = parse(text).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].match_id, "01");
        assert_eq!(matches[0].player_one, "Person A");
        assert_eq!(matches[0].player_two, "Person B");
        assert_eq!(matches[0].points, vec![0, 1, 0]);
        assert_eq!(matches[1].match_id, "02");
        assert_eq!(matches[1].points, vec![1]);
    }

    #[test]
    fn test_header_and_separator_ignore_case() {
        let matches = parse("MATCH:   7  \n  Person A VS Person B  \n0").unwrap();

        assert_eq!(matches[0].match_id, "7");
        assert_eq!(matches[0].player_two, "Person B");
    }

    #[test]
    fn test_match_without_points_is_valid() {
        let matches = parse("Match: 01\nPerson A vs Person B\n").unwrap();

        assert_eq!(matches.len(), 1);
        assert!(matches[0].points.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_empty_match_id() {
        let err = parse("Match:   \nPerson A vs Person B").unwrap_err();
        assert!(matches!(err, ParseError::MalformedHeader { line: 1, .. }));
    }

    #[test]
    fn test_points_before_header() {
        let err = parse("\n0\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedHeader { line: 2, .. }));
    }

    #[test]
    fn test_missing_players_line() {
        let err = parse("Match: 01\n0\n1").unwrap_err();
        assert_eq!(err, ParseError::MissingPlayers { line: 2 });
    }

    #[test]
    fn test_missing_players_before_next_header() {
        let err = parse("Match: 01\nMatch: 02\nPerson A vs Person B").unwrap_err();
        assert_eq!(err, ParseError::MissingPlayers { line: 2 });
    }

    #[test]
    fn test_missing_players_at_end_of_input() {
        let err = parse("Match: 01\nPerson A vs Person B\n0\nMatch: 02\n").unwrap_err();
        assert_eq!(err, ParseError::MissingPlayers { line: 4 });
    }

    #[test]
    fn test_too_many_separators() {
        let err = parse("Match: 01\nA vs B vs C").unwrap_err();
        assert_eq!(err, ParseError::MissingPlayers { line: 2 });
    }

    #[test]
    fn test_duplicate_player_names() {
        let err = parse("Match: 01\nPerson A vs person a").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicatePlayerNames {
                line: 2,
                name: "Person A".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_point_token() {
        let err = parse("Match: 01\nPerson A vs Person B\n0\n\n2\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidPointToken {
                line: 5,
                token: "2".to_string()
            }
        );
    }

    #[test]
    fn test_point_token_must_be_a_single_digit() {
        for token in ["01", "+1", "x", "10"] {
            let text = format!("Match: 01\nPerson A vs Person B\n{token}\n");
            let err = parse(&text).unwrap_err();
            assert_eq!(
                err,
                ParseError::InvalidPointToken {
                    line: 3,
                    token: token.to_string()
                }
            );
        }
    }
}
