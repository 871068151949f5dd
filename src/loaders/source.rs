use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::errors::{LoadError, with_read_context};

const STDIN_LOCATION: &str = "-";

/// Where tournament data is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentSource {
    File(PathBuf),
    Stdin,
}

impl TournamentSource {
    /// `-` reads standard input, anything else must be an existing file
    pub fn resolve(location: &str) -> Result<Self, LoadError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(LoadError::UnsupportedSource(location.to_string()));
        }
        if location == STDIN_LOCATION {
            return Ok(TournamentSource::Stdin);
        }

        let path = Path::new(location);
        if !path.is_file() {
            return Err(LoadError::SourceNotFound(location.to_string()));
        }
        Ok(TournamentSource::File(path.to_path_buf()))
    }

    pub fn describe(&self) -> String {
        match self {
            TournamentSource::File(path) => path.display().to_string(),
            TournamentSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Reads every line, blank ones included, so line numbers stay accurate
    pub async fn read_lines(&self) -> Result<Vec<String>> {
        let location = self.describe();
        info!("Reading tournament data from {}", location);

        let lines = match self {
            TournamentSource::File(path) => {
                let file = with_read_context(File::open(path).await, &location)?;
                collect_lines(BufReader::new(file)).await
            }
            TournamentSource::Stdin => collect_lines(BufReader::new(tokio::io::stdin())).await,
        };

        let lines = with_read_context(lines, &location)?;
        info!("  → Read {} lines", lines.len());
        Ok(lines)
    }
}

async fn collect_lines<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut collected = Vec::new();
    while let Some(line) = lines.next_line().await? {
        collected.push(line);
    }
    Ok(collected)
}
