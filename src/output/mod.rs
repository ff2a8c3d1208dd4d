//! Output generation for the accounts CLI application

use std::process::ExitCode;

use accounts::formatting::{self, Render};
use accounts::language::Document;
use accounts::parsing::ParsingError;
use tracing::{debug, info};

use crate::problem::{concise_parsing_error, full_parsing_error, Severity};

/// What to do about problems found in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Print each problem as a warning on stderr, then the entries.
    Warn,
    /// Print the first problem as an error on stderr and stop.
    Die,
    /// Print only the entries.
    Silent,
    /// Print the problems on stdout and nothing else.
    Stdout,
}

impl Level {
    /// Later flags take precedence over earlier ones.
    pub fn from_flags(validate: bool, quiet: bool, stdout: bool) -> Level {
        let mut level = if validate { Level::Warn } else { Level::Die };
        if quiet {
            level = Level::Silent;
        }
        if stdout {
            level = Level::Stdout;
        }
        level
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Whether to carry on and print the entries, or stop with the given
/// exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Print,
    Stop(u8),
}

pub struct Reporter<'a> {
    pub level: Level,
    pub explain: bool,
    pub filename: &'a str,
    pub renderer: &'a dyn Render,
}

impl Reporter<'_> {
    fn present(&self, error: &ParsingError, severity: Severity) -> String {
        if self.explain {
            full_parsing_error(error, severity, self.filename, self.renderer)
        } else {
            concise_parsing_error(error, severity, self.renderer)
        }
    }

    /// Write out problems according to the level, returning what should
    /// happen next.
    pub fn report(&self, errors: &[ParsingError]) -> Verdict {
        debug!(level = ?self.level, count = errors.len(), "reporting problems");

        for error in errors {
            match self.level {
                Level::Stdout => print!("{}", self.present(error, Severity::Plain)),
                Level::Warn => eprint!("{}", self.present(error, Severity::Warning)),
                Level::Die => {
                    eprint!("{}", self.present(error, Severity::Error));
                    return Verdict::Stop(1);
                }
                Level::Silent => {}
            }
        }

        match self.level {
            Level::Stdout => Verdict::Stop(0),
            _ => Verdict::Print,
        }
    }
}

/// Produce the printable form of the parsed entries.
pub fn entries(document: &Document, format: Format, renderer: &dyn Render) -> Result<String, String> {
    info!(count = document.entries.len(), ?format, "writing entries");

    match format {
        Format::Text => Ok(formatting::render(renderer, &document.entries)),
        Format::Json => serde_json::to_string_pretty(&document.entries)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|error| error.to_string()),
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Print => ExitCode::SUCCESS,
            Verdict::Stop(code) => ExitCode::from(code),
        }
    }
}
