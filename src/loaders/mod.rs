pub mod parser;
pub mod source;

pub use parser::TournamentParser;
pub use source::TournamentSource;
