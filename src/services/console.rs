use anyhow::Result;
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

use crate::config::ConsoleSettings;
use crate::domain::MatchCollection;
use crate::errors::QueryError;
use crate::queries::{GamesPlayerHandler, Query, QueryParser, ScoreMatchHandler};

/// Interactive query loop over processed matches
pub struct Console<'a> {
    matches: &'a MatchCollection,
    settings: ConsoleSettings,
    parser: QueryParser,
}

impl<'a> Console<'a> {
    pub fn new(matches: &'a MatchCollection, settings: ConsoleSettings) -> Result<Self> {
        Ok(Self {
            matches,
            settings,
            parser: QueryParser::new()?,
        })
    }

    /// Runs until `quit` or end of input. The prompt is only shown when `interactive`.
    pub fn run<R, W>(&self, input: R, output: &mut W, interactive: bool) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            if interactive {
                write!(output, "{}", self.settings.prompt)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.parser.parse(&line) {
                Ok(Query::Quit) => break,
                Ok(query) => writeln!(output, "{}", self.answer(&query))?,
                Err(err) => self.print_invalid(output, &err)?,
            }
        }

        debug!("Console closed");
        Ok(())
    }

    pub fn answer(&self, query: &Query) -> String {
        match query {
            Query::ScoreMatch { match_id } => ScoreMatchHandler::new(self.matches).handle(match_id),
            Query::GamesPlayer { player_name } => {
                GamesPlayerHandler::new(self.matches).handle(player_name)
            }
            Query::Quit => String::new(),
        }
    }

    fn print_invalid<W: Write>(&self, output: &mut W, err: &QueryError) -> Result<()> {
        writeln!(output, "{}", err.to_string().red())?;
        for line in self.settings.help {
            writeln!(output, "{}", line)?;
        }
        Ok(())
    }
}
