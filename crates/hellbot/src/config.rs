//! Layered configuration.

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use hellbot_api::ApiConfig;
use hellbot_cache::CoordinatorConfig;
use hellbot_database::DatabaseConfig;
use hellbot_error::{ConfigError, ConfigErrorKind, HellbotResult};
use hellbot_social::CommandsConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../hellbot.toml");

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info")
    #[serde(default = "default_level")]
    level: String,
    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Top-level hellbot configuration.
///
/// Sources in order of precedence (later sources override earlier):
/// 1. Bundled defaults (`hellbot.toml` shipped with the crate)
/// 2. `~/.config/hellbot/hellbot.toml`
/// 3. `./hellbot.toml`
/// 4. `HELLBOT__SECTION__KEY` environment variables
/// 5. `SUPER_CLIENT` / `SUPER_CONTACT` for the API identity headers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct HellbotConfig {
    /// Remote API client settings
    #[serde(default)]
    api: ApiConfig,
    /// SQLite cache location
    #[serde(default)]
    database: DatabaseConfig,
    /// Cache coordinator settings
    #[serde(default)]
    cache: CoordinatorConfig,
    /// Command layer settings
    #[serde(default)]
    commands: CommandsConfig,
    /// Log output settings
    #[serde(default)]
    logging: LoggingConfig,
}

impl HellbotConfig {
    /// Load configuration from every source, user files optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or a value has
    /// the wrong type.
    #[instrument]
    pub fn load() -> HellbotResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder = Self::bundled();
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/hellbot/hellbot.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }
        builder = builder.add_source(File::with_name("hellbot").required(false));

        Self::build(Self::with_environment(builder)?)
    }

    /// Load a single explicit file on top of the bundled defaults, then
    /// apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> HellbotResult<Self> {
        debug!("Loading configuration from file");
        let builder = Self::bundled().add_source(File::from(path.as_ref()));
        Self::build(Self::with_environment(builder)?)
    }

    /// The bundled defaults with `toml` layered on top, ignoring the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `toml` cannot be parsed.
    pub fn from_toml_str(toml: &str) -> HellbotResult<Self> {
        Self::build(Self::bundled().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Only the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file is invalid.
    pub fn bundled_defaults() -> HellbotResult<Self> {
        Self::build(Self::bundled())
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn with_environment(
        builder: ConfigBuilder<DefaultState>,
    ) -> HellbotResult<ConfigBuilder<DefaultState>> {
        let builder = builder
            .add_source(
                Environment::with_prefix("HELLBOT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.super_client", std::env::var("SUPER_CLIENT").ok())
            .and_then(|b| {
                b.set_override_option("api.super_contact", std::env::var("SUPER_CONTACT").ok())
            })
            .map_err(|e| ConfigError::new(ConfigErrorKind::Environment(e.to_string())))?;
        Ok(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> HellbotResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Source(e.to_string())))?
            .try_deserialize::<Self>()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))?;
        Ok(config)
    }
}
