use log::warn;
use std::collections::{BTreeMap, HashMap};

use super::models::{Match, PlayerKey, PlayerStatistics};

/// Processed matches indexed by match ID, with a case-insensitive player index
#[derive(Debug)]
pub struct MatchCollection {
    matches: BTreeMap<String, Match>,
    by_player: HashMap<PlayerKey, Vec<String>>,
}

impl MatchCollection {
    pub fn new() -> Self {
        Self {
            matches: BTreeMap::new(),
            by_player: HashMap::new(),
        }
    }

    pub fn add(&mut self, tennis_match: Match) {
        if let Some(previous) = self.matches.remove(&tennis_match.id) {
            warn!("Match {} appears more than once, keeping the last one", previous.id);
            self.unindex(&previous);
        }

        for player in [&tennis_match.players.one, &tennis_match.players.two] {
            self.by_player
                .entry(player.key().clone())
                .or_default()
                .push(tennis_match.id.clone());
        }
        self.matches.insert(tennis_match.id.clone(), tennis_match);
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Match> {
        self.matches.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.values()
    }

    pub fn matches_for_player(&self, name: &str) -> Vec<&Match> {
        self.by_player
            .get(&PlayerKey::new(name))
            .map(|ids| ids.iter().filter_map(|id| self.matches.get(id)).collect())
            .unwrap_or_default()
    }

    /// Games won and lost by a player across every stored match
    pub fn player_statistics(&self, name: &str) -> Option<PlayerStatistics> {
        let matches = self.matches_for_player(name);
        if matches.is_empty() {
            return None;
        }

        let mut stats = PlayerStatistics {
            player_name: name.trim().to_string(),
            games_won: 0,
            games_lost: 0,
            games_in_progress: 0,
        };

        for tennis_match in matches {
            let Some(side) = tennis_match.players.side_of(name) else {
                continue;
            };
            for game in tennis_match.games() {
                match game.winner {
                    Some(winner) if winner == side => stats.games_won += 1,
                    Some(_) => stats.games_lost += 1,
                    None => stats.games_in_progress += 1,
                }
            }
        }

        Some(stats)
    }

    fn unindex(&mut self, tennis_match: &Match) {
        for player in [&tennis_match.players.one, &tennis_match.players.two] {
            if let Some(ids) = self.by_player.get_mut(player.key()) {
                ids.retain(|id| id != &tennis_match.id);
                if ids.is_empty() {
                    self.by_player.remove(player.key());
                }
            }
        }
    }
}

impl Default for MatchCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Match> for MatchCollection {
    fn from_iter<I: IntoIterator<Item = Match>>(iter: I) -> Self {
        let mut collection = Self::new();
        for tennis_match in iter {
            collection.add(tennis_match);
        }
        collection
    }
}
