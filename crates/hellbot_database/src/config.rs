//! Database configuration.

use serde::{Deserialize, Serialize};

/// Location and tuning of the SQLite cache database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct DatabaseConfig {
    /// Path of the database file, or `:memory:`
    #[serde(default = "default_path")]
    path: String,
    /// How long SQLite waits on a locked database before failing
    #[serde(default = "default_busy_timeout_ms")]
    busy_timeout_ms: u32,
}

fn default_path() -> String {
    "hellbot.db".to_string()
}

fn default_busy_timeout_ms() -> u32 {
    5_000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    /// Configuration for the given database path with default tuning.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}
