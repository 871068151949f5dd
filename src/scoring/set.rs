use std::mem;

use super::{SetScorer, first_to_reach};
use crate::config::ScoringRules;
use crate::domain::{Game, Set};

/// Simplified set scoring: the first player to win six games takes the set
#[derive(Debug, Clone, Copy)]
pub struct StandardSetScorer {
    games_to_win: usize,
}

impl StandardSetScorer {
    pub fn new(rules: &ScoringRules) -> Self {
        Self {
            games_to_win: rules.games_to_win_set,
        }
    }
}

impl Default for StandardSetScorer {
    fn default() -> Self {
        Self::new(&ScoringRules::default())
    }
}

impl SetScorer for StandardSetScorer {
    fn convert_games(&self, games: &[Game]) -> Vec<Set> {
        let mut sets = Vec::new();
        let mut history: Vec<Game> = Vec::new();

        for game in games {
            history.push(game.clone());

            let winner = first_to_reach(history.iter().map(|g| g.winner), self.games_to_win);
            if winner.is_some() {
                sets.push(Set {
                    players: game.players.clone(),
                    games: mem::take(&mut history),
                    winner,
                });
            }
        }

        // an unfinished set
        if let Some(first) = history.first() {
            sets.push(Set {
                players: first.players.clone(),
                games: history,
                winner: None,
            });
        }

        sets
    }
}
