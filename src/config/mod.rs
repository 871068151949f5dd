pub mod settings;

pub use settings::{AppConfig, ConsoleSettings, ScoringRules};
