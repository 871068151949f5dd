pub mod games_player;
pub mod parser;
pub mod score_match;

pub use games_player::GamesPlayerHandler;
pub use parser::{Query, QueryParser};
pub use score_match::ScoreMatchHandler;
