pub mod game;
pub mod match_scorer;
pub mod set;

pub use game::StandardGameScorer;
pub use match_scorer::StandardMatchScorer;
pub use set::StandardSetScorer;

use crate::domain::{Game, Match, Players, Set, Side};

/// Turns point-winner tokens into games
pub trait GameScorer {
    /// `0` is a point for player one, `1` for player two. Any trailing,
    /// unfinished game is returned last with no winner.
    fn convert_points(&self, players: &Players, points: &[u8]) -> Vec<Game>;
}

/// Groups games into sets
pub trait SetScorer {
    fn convert_games(&self, games: &[Game]) -> Vec<Set>;
}

/// Builds a match from its sets and decides the winner
pub trait MatchScorer {
    fn convert_sets(&self, match_id: &str, players: &Players, sets: Vec<Set>) -> Match;
}

/// First side whose count of `winners` reaches `threshold`, checking player one first
pub(crate) fn first_to_reach<I>(winners: I, threshold: usize) -> Option<Side>
where
    I: IntoIterator<Item = Option<Side>>,
{
    let (mut one, mut two) = (0, 0);
    for winner in winners {
        match winner {
            Some(Side::One) => one += 1,
            Some(Side::Two) => two += 1,
            None => {}
        }
    }

    if one >= threshold {
        Some(Side::One)
    } else if two >= threshold {
        Some(Side::Two)
    } else {
        None
    }
}
