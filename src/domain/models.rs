use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Case-insensitive lookup key for a player name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerKey(String);

impl PlayerKey {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }
}

/// A tennis player, identified by name regardless of case
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    name: String,
    #[serde(skip)]
    key: PlayerKey,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = PlayerKey::new(&name);
        Self { name, key }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &PlayerKey {
        &self.key
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One of the two participants of a game, set or match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    /// Maps a point-winner token: `0` is player one, `1` player two
    pub fn from_token(token: u8) -> Option<Self> {
        match token {
            0 => Some(Side::One),
            1 => Some(Side::Two),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// The ordered pair of players taking part in a contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Players {
    pub one: Player,
    pub two: Player,
}

impl Players {
    pub fn new(one: Player, two: Player) -> Self {
        Self { one, two }
    }

    pub fn get(&self, side: Side) -> &Player {
        match side {
            Side::One => &self.one,
            Side::Two => &self.two,
        }
    }

    pub fn side_of(&self, name: &str) -> Option<Side> {
        let key = PlayerKey::new(name);
        Side::BOTH
            .into_iter()
            .find(|&side| self.get(side).key() == &key)
    }
}

/// Tennis point standing within a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Point {
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub one: Point,
    pub two: Point,
}

impl Score {
    pub const LOVE_ALL: Score = Score {
        one: Point::Love,
        two: Point::Love,
    };

    pub fn new(one: Point, two: Point) -> Self {
        Self { one, two }
    }

    pub fn get(&self, side: Side) -> Point {
        match side {
            Side::One => self.one,
            Side::Two => self.two,
        }
    }

    /// The side holding `Point::Game`, if any
    pub fn game_winner(&self) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.get(side) == Point::Game)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::LOVE_ALL
    }
}

/// A single game: its point history and resulting score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub players: Players,
    pub points: Vec<Side>,
    pub score: Score,
    pub winner: Option<Side>,
}

impl Game {
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.map(|side| self.players.get(side))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Set {
    pub players: Players,
    pub games: Vec<Game>,
    pub winner: Option<Side>,
}

impl Set {
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn games_won(&self, side: Side) -> usize {
        self.games
            .iter()
            .filter(|game| game.winner == Some(side))
            .count()
    }

    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.map(|side| self.players.get(side))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: String,
    pub players: Players,
    pub sets: Vec<Set>,
    pub winner: Option<Side>,
}

impl Match {
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn sets_won(&self, side: Side) -> usize {
        self.sets
            .iter()
            .filter(|set| set.winner == Some(side))
            .count()
    }

    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.map(|side| self.players.get(side))
    }

    pub fn loser_player(&self) -> Option<&Player> {
        self.winner.map(|side| self.players.get(side.opponent()))
    }

    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.sets.iter().flat_map(|set| set.games.iter())
    }
}

/// Match data as read from a tournament source, before scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawMatchData {
    pub match_id: String,
    pub player_one: String,
    pub player_two: String,
    pub points: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStatistics {
    pub player_name: String,
    pub games_won: usize,
    pub games_lost: usize,
    pub games_in_progress: usize,
}
