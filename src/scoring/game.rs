use std::mem;

use super::GameScorer;
use crate::domain::{Game, Players, Point, Score, Side};

/// Standard game scoring: love, 15, 30, 40, deuce and advantage
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGameScorer;

impl StandardGameScorer {
    pub fn new() -> Self {
        Self
    }
}

impl GameScorer for StandardGameScorer {
    fn convert_points(&self, players: &Players, points: &[u8]) -> Vec<Game> {
        let mut games = Vec::new();
        let mut history = Vec::new();
        let mut score = Score::LOVE_ALL;

        for &token in points {
            // tokens are validated on load; the scorer still accepts any byte
            let point_winner = Side::from_token(token).unwrap_or(Side::Two);
            history.push(point_winner);
            score = update_score(score, point_winner);

            if let Some(winner) = score.game_winner() {
                games.push(build_game(players, mem::take(&mut history), score, Some(winner)));
                score = Score::LOVE_ALL;
            }
        }

        // an unfinished game
        if !history.is_empty() {
            games.push(build_game(players, history, score, None));
        }

        games
    }
}

fn update_score(score: Score, point_winner: Side) -> Score {
    Score::new(
        adjust_point(score.one, point_winner == Side::One, score.two),
        adjust_point(score.two, point_winner == Side::Two, score.one),
    )
}

/// Moves one player's standing after a point, given the opponent's standing before it
fn adjust_point(point: Point, won_point: bool, opponent: Point) -> Point {
    if !won_point {
        // advantage is lost, anything else is kept
        return if point == Point::Advantage {
            Point::Forty
        } else {
            point
        };
    }

    match point {
        Point::Love => Point::Fifteen,
        Point::Fifteen => Point::Thirty,
        Point::Thirty => Point::Forty,
        Point::Forty => match opponent {
            Point::Advantage => Point::Forty, // back to deuce
            Point::Forty => Point::Advantage,
            _ => Point::Game,
        },
        Point::Advantage => Point::Game,
        Point::Game => Point::Game,
    }
}

fn build_game(players: &Players, points: Vec<Side>, score: Score, winner: Option<Side>) -> Game {
    Game {
        players: players.clone(),
        points,
        score,
        winner,
    }
}
