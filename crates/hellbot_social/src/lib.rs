//! Chat-agnostic command layer for hellbot.
//!
//! Turns a user's command into reply lines: the current Major Orders, a
//! random inspirational quote, or a typed error whose user-facing text the
//! chat layer can send as-is. Nothing here speaks a chat protocol.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod config;
mod cooldown;
mod error;
mod format;
mod quotes;

pub use commands::{BotCommand, CommandHandler};
pub use config::CommandsConfig;
pub use cooldown::{CommandCooldowns, CooldownRule};
pub use error::{CommandError, CommandErrorKind, CommandResult};
pub use format::{NO_ACTIVE_ORDERS, ORDERS_UNAVAILABLE, format_order, format_time_remaining};
pub use quotes::QuoteBook;
