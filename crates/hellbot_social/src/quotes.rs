//! Quote files.

use crate::{CommandError, CommandErrorKind, CommandResult};
use rand::seq::SliceRandom;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// A list of one-line quotes read from a text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBook {
    name: String,
    quotes: Vec<String>,
}

impl QuoteBook {
    /// Build a quote book from lines in memory.
    pub fn new(name: impl Into<String>, quotes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            quotes,
        }
    }

    /// Read `file_name` inside `dir`, one quote per line.
    ///
    /// Lines are trimmed and blank lines skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CommandErrorKind::QuotesFile`] if the file cannot be read.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn from_file(dir: impl AsRef<Path>, file_name: &str) -> CommandResult<Self> {
        let path = dir.as_ref().join(file_name);
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            CommandError::new(CommandErrorKind::QuotesFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        let quotes: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if quotes.is_empty() {
            warn!(path = %path.display(), "Quotes file has no entries");
        } else {
            debug!(count = quotes.len(), "Loaded quotes");
        }

        Ok(Self::new(file_name, quotes))
    }

    /// Name of the book (its file name when read from disk).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All quotes in file order.
    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// Number of quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// True when there is nothing to pick from.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// A uniformly random quote.
    ///
    /// # Errors
    ///
    /// Returns [`CommandErrorKind::EmptyQuoteBook`] if the book is empty.
    pub fn random(&self) -> CommandResult<&str> {
        self.quotes
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .ok_or_else(|| CommandError::new(CommandErrorKind::EmptyQuoteBook(self.name.clone())))
    }
}
