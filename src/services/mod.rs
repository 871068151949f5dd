pub mod console;
pub mod processing;

pub use console::Console;
pub use processing::ProcessingService;
