//! Command error types.

use crate::BotCommand;
use derive_more::{Display, Error};

/// Result type for command handling.
pub type CommandResult<T> = Result<T, CommandError>;

/// Specific command error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum CommandErrorKind {
    /// The command name is not one the bot knows.
    #[display("Command not found: {}", _0)]
    CommandNotFound(String),

    /// The user invoked the command again too soon.
    #[display("Command '{}' on cooldown: retry after {} seconds", command, retry_after_secs)]
    Cooldown {
        /// Command that was limited
        command: BotCommand,
        /// Whole seconds until the next use is allowed
        retry_after_secs: u64,
    },

    /// The current orders could not be obtained.
    #[display("Orders unavailable: {}", _0)]
    OrdersUnavailable(String),

    /// A quotes file could not be read.
    #[display("Failed to read quotes file '{}': {}", path, reason)]
    QuotesFile {
        /// File that failed to load
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// A quote book has no entries to pick from.
    #[display("Quote book '{}' is empty", _0)]
    EmptyQuoteBook(String),

    /// A cooldown rule cannot be turned into a rate limit.
    #[display("Invalid cooldown for '{}': {}", command, reason)]
    InvalidCooldown {
        /// Command the rule belongs to
        command: BotCommand,
        /// Why the rule was rejected
        reason: String,
    },
}

/// Command error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    /// The kind of error that occurred
    pub kind: CommandErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl CommandError {
    /// Create a new command error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
