//! Command dispatch.

use crate::{
    CommandCooldowns, CommandError, CommandErrorKind, CommandResult, CommandsConfig,
    NO_ACTIVE_ORDERS, ORDERS_UNAVAILABLE, QuoteBook, format_order,
};
use hellbot_cache::CacheCoordinator;
use hellbot_interface::Clock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Reply for a name that is not a command.
const COMMAND_NOT_FOUND: &str = "Command not found. Please check the command name.";
/// Reply for any other failure.
const GENERIC_FAILURE: &str = "An error occurred while processing your command.";

/// Commands the bot answers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum BotCommand {
    /// The current Major Orders
    Orders,
    /// A random inspirational quote
    Inspire,
}

impl BotCommand {
    /// One-line help text.
    pub fn help(&self) -> &'static str {
        match self {
            BotCommand::Orders => "Get the current Major Orders.",
            BotCommand::Inspire => "Inspires our brave Helldivers with a quote.",
        }
    }
}

/// Answers commands on behalf of a chat layer.
pub struct CommandHandler {
    coordinator: Arc<CacheCoordinator>,
    clock: Arc<dyn Clock>,
    inspirational: QuoteBook,
    error_phrases: QuoteBook,
    cooldowns: CommandCooldowns,
}

impl std::fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHandler")
            .field("inspirational", &self.inspirational.len())
            .field("error_phrases", &self.error_phrases.len())
            .field("cooldowns", &self.cooldowns)
            .finish_non_exhaustive()
    }
}

impl CommandHandler {
    /// Create a handler from its parts.
    pub fn new(
        coordinator: Arc<CacheCoordinator>,
        clock: Arc<dyn Clock>,
        inspirational: QuoteBook,
        error_phrases: QuoteBook,
        cooldowns: CommandCooldowns,
    ) -> Self {
        Self {
            coordinator,
            clock,
            inspirational,
            error_phrases,
            cooldowns,
        }
    }

    /// Create a handler reading its quote files and cooldowns from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a quotes file cannot be read or a cooldown rule
    /// is invalid.
    pub fn from_config(
        config: &CommandsConfig,
        coordinator: Arc<CacheCoordinator>,
        clock: Arc<dyn Clock>,
    ) -> CommandResult<Self> {
        let dir = Path::new(config.data_dir());
        Ok(Self::new(
            coordinator,
            clock,
            QuoteBook::from_file(dir, config.inspirational_quotes())?,
            QuoteBook::from_file(dir, config.error_phrases())?,
            CommandCooldowns::from_config(config)?,
        ))
    }

    /// Answer `command` for `user`, returning one message per line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandErrorKind::Cooldown`] when the user is over the
    /// limit, [`CommandErrorKind::OrdersUnavailable`] when the orders could
    /// not be obtained, or [`CommandErrorKind::EmptyQuoteBook`] when there
    /// is no quote to give.
    #[instrument(skip(self))]
    pub async fn handle(&self, user: &str, command: BotCommand) -> CommandResult<Vec<String>> {
        info!("Command invoked");
        self.cooldowns.check(command, user)?;

        match command {
            BotCommand::Orders => self.orders().await,
            BotCommand::Inspire => Ok(vec![self.inspirational.random()?.to_string()]),
        }
    }

    /// Answer a command given by name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandErrorKind::CommandNotFound`] for an unknown name,
    /// otherwise as [`CommandHandler::handle`].
    pub async fn handle_named(&self, user: &str, name: &str) -> CommandResult<Vec<String>> {
        let command = BotCommand::from_str(name.trim()).map_err(|_| {
            CommandError::new(CommandErrorKind::CommandNotFound(name.to_string()))
        })?;
        self.handle(user, command).await
    }

    /// The message to show a user for `err`.
    pub fn reply_for_error(&self, err: &CommandError) -> String {
        match &err.kind {
            CommandErrorKind::Cooldown {
                retry_after_secs, ..
            } => {
                let wait = format!(
                    "Wait {} seconds before you ask me that again.",
                    retry_after_secs
                );
                match self.error_phrases.random() {
                    Ok(phrase) => format!("{} {}", phrase, wait),
                    Err(_) => wait,
                }
            }
            CommandErrorKind::CommandNotFound(_) => COMMAND_NOT_FOUND.to_string(),
            CommandErrorKind::OrdersUnavailable(_) => ORDERS_UNAVAILABLE.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    async fn orders(&self) -> CommandResult<Vec<String>> {
        let orders = self.coordinator.get_current_orders().await.map_err(|e| {
            error!(error = %e, "Failed to get current orders");
            CommandError::new(CommandErrorKind::OrdersUnavailable(e.kind.to_string()))
        })?;

        if orders.is_empty() {
            return Ok(vec![NO_ACTIVE_ORDERS.to_string()]);
        }
        let now = self.clock.now();
        Ok(orders.iter().map(|order| format_order(order, now)).collect())
    }
}
