use log::debug;

use crate::config::ScoringRules;
use crate::domain::{Match, Player, Players, RawMatchData};
use crate::scoring::{
    GameScorer, MatchScorer, SetScorer, StandardGameScorer, StandardMatchScorer,
    StandardSetScorer,
};

/// Pipes raw points through the game, set and match scorers
pub struct MatchProcessor {
    game_scorer: Box<dyn GameScorer + Send + Sync>,
    set_scorer: Box<dyn SetScorer + Send + Sync>,
    match_scorer: Box<dyn MatchScorer + Send + Sync>,
}

impl MatchProcessor {
    pub fn new(
        game_scorer: Box<dyn GameScorer + Send + Sync>,
        set_scorer: Box<dyn SetScorer + Send + Sync>,
        match_scorer: Box<dyn MatchScorer + Send + Sync>,
    ) -> Self {
        Self {
            game_scorer,
            set_scorer,
            match_scorer,
        }
    }

    pub fn standard(rules: &ScoringRules) -> Self {
        Self::new(
            Box::new(StandardGameScorer::new()),
            Box::new(StandardSetScorer::new(rules)),
            Box::new(StandardMatchScorer::new(rules)),
        )
    }

    pub fn create_match(&self, raw: &RawMatchData) -> Match {
        let players = Players::new(
            Player::new(raw.player_one.as_str()),
            Player::new(raw.player_two.as_str()),
        );

        let games = self.game_scorer.convert_points(&players, &raw.points);
        let sets = self.set_scorer.convert_games(&games);
        debug!(
            "Match {}: {} points, {} games, {} sets",
            raw.match_id,
            raw.points.len(),
            games.len(),
            sets.len()
        );

        self.match_scorer.convert_sets(&raw.match_id, &players, sets)
    }
}

impl Default for MatchProcessor {
    fn default() -> Self {
        Self::standard(&ScoringRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Point, Score, Set, Side};

    fn raw(points: Vec<u8>) -> RawMatchData {
        RawMatchData {
            match_id: "01".to_string(),
            player_one: "Person A".to_string(),
            player_two: "Person B".to_string(),
            points,
        }
    }

    #[test]
    fn test_one_set_is_not_a_match() {
        let points = [0u8; 4].repeat(6);
        assert_eq!(points.len(), 24);

        let result = MatchProcessor::default().create_match(&raw(points));

        assert_eq!(result.id, "01");
        assert_eq!(result.sets.len(), 1);
        assert_eq!(result.sets[0].winner, Some(Side::One));
        assert_eq!(result.sets[0].games_won(Side::One), 6);
        assert_eq!(result.sets[0].games_won(Side::Two), 0);
        assert!(result.sets[0].games.iter().all(|g| {
            g.score == Score::new(Point::Game, Point::Love) && g.points.len() == 4
        }));
        // set complete, match still in progress
        assert_eq!(result.winner, None);
    }

    #[test]
    fn test_two_sets_win_the_match() {
        let points = [0u8; 4].repeat(12);

        let result = MatchProcessor::default().create_match(&raw(points));

        assert_eq!(result.sets.len(), 2);
        assert_eq!(result.winner, Some(Side::One));
        assert_eq!(result.winner_player().map(Player::name), Some("Person A"));
    }

    #[test]
    fn test_player_two_wins_after_losing_first_set() {
        let mut points = [0u8; 4].repeat(6);
        points.extend([1u8; 4].repeat(12));

        let result = MatchProcessor::default().create_match(&raw(points));

        let set_winners: Vec<_> = result.sets.iter().map(|s: &Set| s.winner).collect();
        assert_eq!(set_winners, vec![Some(Side::One), Some(Side::Two), Some(Side::Two)]);
        assert_eq!(result.winner, Some(Side::Two));
    }

    #[test]
    fn test_players_built_from_raw_names() {
        let result = MatchProcessor::default().create_match(&raw(vec![0, 1]));

        assert_eq!(result.players.one.name(), "Person A");
        assert_eq!(result.players.two.name(), "Person B");
        assert_eq!(result.sets.len(), 1);
        assert_eq!(result.sets[0].games.len(), 1);
        assert!(!result.sets[0].games[0].has_winner());
    }

    #[test]
    fn test_no_points_no_sets() {
        let result = MatchProcessor::default().create_match(&raw(Vec::new()));

        assert!(result.sets.is_empty());
        assert!(!result.has_winner());
    }

    #[test]
    fn test_processing_is_repeatable() {
        let processor = MatchProcessor::default();
        let data = raw([0u8, 1, 1, 0, 0, 0, 1, 0].repeat(20));

        assert_eq!(processor.create_match(&data), processor.create_match(&data));
    }
}
