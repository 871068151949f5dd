use crate::domain::MatchCollection;

/// Answers `Games Player <name>` with games won and lost
pub struct GamesPlayerHandler<'a> {
    matches: &'a MatchCollection,
}

impl<'a> GamesPlayerHandler<'a> {
    pub fn new(matches: &'a MatchCollection) -> Self {
        Self { matches }
    }

    pub fn handle(&self, player_name: &str) -> String {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return "Player name cannot be null or empty".to_string();
        }

        match self.matches.player_statistics(player_name) {
            Some(stats) => format!("{} {}", stats.games_won, stats.games_lost),
            None => format!("Error: Player '{}' not found", player_name),
        }
    }
}
