use crate::domain::MatchCollection;

/// Answers `Score Match <id>`
pub struct ScoreMatchHandler<'a> {
    matches: &'a MatchCollection,
}

impl<'a> ScoreMatchHandler<'a> {
    pub fn new(matches: &'a MatchCollection) -> Self {
        Self { matches }
    }

    pub fn handle(&self, match_id: &str) -> String {
        let match_id = match_id.trim();
        let Some(tennis_match) = self.matches.get(match_id) else {
            return format!("Error: Match '{}' not found", match_id);
        };

        let Some(side) = tennis_match.winner else {
            return format!("Error: Match '{}' is not completed", match_id);
        };
        let winner = tennis_match.players.get(side);
        let loser = tennis_match.players.get(side.opponent());

        format!(
            "{} defeated {}, {} sets to {}",
            winner,
            loser,
            tennis_match.sets_won(side),
            tennis_match.sets_won(side.opponent())
        )
    }
}
