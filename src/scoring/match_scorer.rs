use super::{MatchScorer, first_to_reach};
use crate::config::ScoringRules;
use crate::domain::{Match, Players, Set};

/// Best-of-three match scoring
#[derive(Debug, Clone, Copy)]
pub struct StandardMatchScorer {
    sets_to_win: usize,
}

impl StandardMatchScorer {
    pub fn new(rules: &ScoringRules) -> Self {
        Self {
            sets_to_win: rules.sets_to_win_match,
        }
    }
}

impl Default for StandardMatchScorer {
    fn default() -> Self {
        Self::new(&ScoringRules::default())
    }
}

impl MatchScorer for StandardMatchScorer {
    /// Every set is kept; the winner is decided from the set counts over all of them.
    fn convert_sets(&self, match_id: &str, players: &Players, sets: Vec<Set>) -> Match {
        let winner = first_to_reach(sets.iter().map(|s| s.winner), self.sets_to_win);

        Match {
            id: match_id.to_string(),
            players: players.clone(),
            sets,
            winner,
        }
    }
}
