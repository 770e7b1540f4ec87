//! Coordinator configuration.

use crate::DEFAULT_MAX_AGE_SECS;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the cache coordinator.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct CoordinatorConfig {
    /// Oldest acceptable `last_fetched` before a re-fetch (seconds)
    #[serde(default = "default_max_age_secs")]
    max_age_secs: u64,

    /// Upper bound on one remote fetch (seconds)
    #[serde(default = "default_fetch_timeout_secs")]
    fetch_timeout_secs: u64,

    /// Upper bound on one storage call (seconds)
    #[serde(default = "default_storage_timeout_secs")]
    storage_timeout_secs: u64,

    /// Return the last-known-good snapshot when a fetch fails
    #[serde(default)]
    serve_stale_on_fetch_failure: bool,

    /// Deactivate active orders the remote source no longer lists
    #[serde(default = "default_retire_missing")]
    retire_missing: bool,

    /// Remote query that lists the current orders
    #[serde(default = "default_query")]
    #[setters(into)]
    query: String,
}

fn default_max_age_secs() -> u64 {
    DEFAULT_MAX_AGE_SECS
}

fn default_fetch_timeout_secs() -> u64 {
    15
}

fn default_storage_timeout_secs() -> u64 {
    10
}

fn default_retire_missing() -> bool {
    true
}

fn default_query() -> String {
    "assignments".to_string()
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            max_age_secs: default_max_age_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            storage_timeout_secs: default_storage_timeout_secs(),
            serve_stale_on_fetch_failure: false,
            retire_missing: default_retire_missing(),
            query: default_query(),
        }
    }
}

impl CoordinatorConfig {
    /// Fetch timeout as a [`Duration`].
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Storage timeout as a [`Duration`].
    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.storage_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoordinatorConfig::default();
        assert_eq!(*config.max_age_secs(), 86_400);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(15));
        assert_eq!(config.storage_timeout(), Duration::from_secs(10));
        assert!(!*config.serve_stale_on_fetch_failure());
        assert!(*config.retire_missing());
        assert_eq!(config.query(), "assignments");
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: CoordinatorConfig =
            serde_json::from_str(r#"{"serve_stale_on_fetch_failure": true}"#).unwrap();
        assert!(*config.serve_stale_on_fetch_failure());
        assert_eq!(*config.max_age_secs(), 86_400);
    }

    #[test]
    fn test_builder_and_setters() {
        let config = CoordinatorConfigBuilder::default()
            .max_age_secs(60)
            .build()
            .unwrap()
            .with_query("war/status");
        assert_eq!(*config.max_age_secs(), 60);
        assert_eq!(*config.fetch_timeout_secs(), 15);
        assert_eq!(config.query(), "war/status");
    }
}
