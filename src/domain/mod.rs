mod collection;
pub mod models;

pub use collection::MatchCollection;
pub use models::*;
