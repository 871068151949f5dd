use anyhow::Result;
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::{MatchCollection, RawMatchData};
use crate::errors::with_parse_context;
use crate::loaders::{TournamentParser, TournamentSource};
use crate::processing::MatchProcessor;

/// Loads a tournament source and scores every match in it
pub struct ProcessingService {
    parser: TournamentParser,
    processor: MatchProcessor,
}

impl ProcessingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            parser: TournamentParser::new(),
            processor: MatchProcessor::standard(&config.scoring),
        }
    }

    pub async fn run(&self, location: &str) -> Result<MatchCollection> {
        info!("=== Loading Tournament ===");

        // Step 1: Resolve and read the source
        let source = TournamentSource::resolve(location)?;
        let lines = source.read_lines().await?;

        // Step 2: Parse raw match data
        let raw_matches = with_parse_context(self.parser.parse(&lines), &source.describe())?;
        info!("  → Parsed {} matches", raw_matches.len());

        // Step 3: Score and store
        let matches = self.process_matches(&raw_matches);
        info!("  → Stored {} matches", matches.len());

        info!("=== Loading Complete ===");
        Ok(matches)
    }

    pub fn process_matches(&self, raw_matches: &[RawMatchData]) -> MatchCollection {
        raw_matches
            .iter()
            .map(|raw| self.processor.create_match(raw))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseError;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_scores_every_match() {
        let mut contents = String::from("Match: 01\nPerson A vs Person B\n");
        for _ in 0..48 {
            contents.push_str("0\n");
        }
        contents.push_str("\nMatch: 02\nPerson A vs Person C\n1\n0\n");
        let path = write_temp("tennis_calculator_processing_ok.txt", &contents);

        let service = ProcessingService::new(&AppConfig::new());
        let matches = service.run(path.to_str().unwrap()).await.unwrap();

        assert_eq!(matches.len(), 2);
        assert!(matches.get("01").unwrap().has_winner());
        assert!(!matches.get("02").unwrap().has_winner());

        // Cleanup
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_run_reports_parse_errors() {
        let path = write_temp(
            "tennis_calculator_processing_bad.txt",
            "Match: 01\nPerson A vs Person B\n0\nx\n",
        );

        let service = ProcessingService::new(&AppConfig::new());
        let err = service.run(path.to_str().unwrap()).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::InvalidPointToken {
                line: 4,
                token: "x".to_string()
            })
        );

        // Cleanup
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_run_missing_source() {
        let service = ProcessingService::new(&AppConfig::new());
        assert!(service.run("/no/such/tournament.txt").await.is_err());
    }
}
