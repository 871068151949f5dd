pub mod match_processor;

pub use match_processor::MatchProcessor;
