//! Wiring of the collaborators.

use crate::HellbotConfig;
use hellbot_api::HelldiversClient;
use hellbot_cache::CacheCoordinator;
use hellbot_database::SqliteOrderStore;
use hellbot_error::HellbotResult;
use hellbot_interface::{Clock, SystemClock};
use hellbot_social::{CommandHandler, CommandResult};
use std::sync::Arc;
use tracing::info;

/// A fully wired bot: API client, SQLite store and cache coordinator.
pub struct Hellbot {
    config: HellbotConfig,
    client: Arc<HelldiversClient>,
    coordinator: Arc<CacheCoordinator>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Hellbot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hellbot")
            .field("config", &self.config)
            .field("coordinator", &self.coordinator)
            .finish_non_exhaustive()
    }
}

impl Hellbot {
    /// Build every component from `config` using the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the database
    /// cannot be opened.
    pub fn from_config(config: HellbotConfig) -> HellbotResult<Self> {
        let client = Arc::new(HelldiversClient::new(config.api().clone())?);
        let store = Arc::new(SqliteOrderStore::open(config.database())?);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let coordinator = Arc::new(CacheCoordinator::new(
            client.clone(),
            store,
            Arc::clone(&clock),
            config.cache().clone(),
        ));
        info!(database = %config.database().path(), "hellbot ready");

        Ok(Self {
            config,
            client,
            coordinator,
            clock,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &HellbotConfig {
        &self.config
    }

    /// The API client.
    pub fn client(&self) -> &HelldiversClient {
        &self.client
    }

    /// The cache coordinator.
    pub fn coordinator(&self) -> &Arc<CacheCoordinator> {
        &self.coordinator
    }

    /// A command handler using the configured quote files and cooldowns.
    ///
    /// # Errors
    ///
    /// Returns an error if a quotes file cannot be read.
    pub fn command_handler(&self) -> CommandResult<CommandHandler> {
        CommandHandler::from_config(
            self.config.commands(),
            Arc::clone(&self.coordinator),
            Arc::clone(&self.clock),
        )
    }
}
