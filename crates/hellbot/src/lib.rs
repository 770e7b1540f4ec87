//! hellbot: Helldivers 2 Major Orders, cached and relayed on command.
//!
//! This crate wires the workspace together:
//! - [`HellbotConfig`] loads layered configuration
//! - [`Hellbot`] builds the API client, SQLite store and cache coordinator
//! - [`init_logging`] installs the `tracing` subscriber
//!
//! The member crates are re-exported for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;
mod observability;

pub use app::Hellbot;
pub use config::{HellbotConfig, LoggingConfig};
pub use observability::init_logging;

pub use hellbot_api::{ApiConfig, HelldiversClient};
pub use hellbot_cache::{
    CacheCoordinator, CoordinatorConfig, FreshnessPolicy, OrderSnapshot, RefreshReport,
    SnapshotSource,
};
pub use hellbot_core::{MajorOrder, ParsedOrder, RewardType, parse_major_orders};
pub use hellbot_database::{DatabaseConfig, SqliteOrderStore};
pub use hellbot_error::{
    ConfigError, ConfigErrorKind, CoordinatorError, CoordinatorErrorKind, FetchError,
    FetchErrorKind, HellbotError, HellbotErrorKind, HellbotResult, StorageError, StorageErrorKind,
};
pub use hellbot_interface::{Clock, OrderFetcher, OrderStore, SystemClock};
pub use hellbot_social::{
    BotCommand, CommandError, CommandErrorKind, CommandHandler, CommandsConfig, QuoteBook,
};
