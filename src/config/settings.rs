/// Thresholds applied by the standard scorers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub games_to_win_set: usize,
    pub sets_to_win_match: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            games_to_win_set: 6,  // no two-game margin, no tie-break
            sets_to_win_match: 2, // best of three
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleSettings {
    pub prompt: &'static str,
    pub help: &'static [&'static str],
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            prompt: "> ",
            help: &[
                "Available commands:",
                "  Score Match <id>        - Get match result",
                "  Games Player <name>     - Get player statistics",
                "  quit                    - Exit application",
                "Please try again.",
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringRules,
    pub console: ConsoleSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringRules::default(),
            console: ConsoleSettings::default(),
        }
    }
}
