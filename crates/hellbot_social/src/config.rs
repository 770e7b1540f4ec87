//! Command layer configuration.

use crate::CooldownRule;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Where quotes live and how often each command may be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct CommandsConfig {
    /// Directory holding the quote files
    #[serde(default = "default_data_dir")]
    #[setters(into)]
    data_dir: String,
    /// Quotes served by `inspire`
    #[serde(default = "default_inspirational_quotes")]
    #[setters(into)]
    inspirational_quotes: String,
    /// Phrases prefixed to cooldown replies
    #[serde(default = "default_error_phrases")]
    #[setters(into)]
    error_phrases: String,
    /// Per-user limit on `orders`
    #[serde(default = "default_orders_cooldown")]
    orders_cooldown: CooldownRule,
    /// Per-user limit on `inspire`
    #[serde(default = "default_inspire_cooldown")]
    inspire_cooldown: CooldownRule,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_inspirational_quotes() -> String {
    "inspirational_quotes.txt".to_string()
}

fn default_error_phrases() -> String {
    "error_phrases.txt".to_string()
}

fn default_orders_cooldown() -> CooldownRule {
    CooldownRule::new(1, 60)
}

fn default_inspire_cooldown() -> CooldownRule {
    CooldownRule::new(5, 30)
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            inspirational_quotes: default_inspirational_quotes(),
            error_phrases: default_error_phrases(),
            orders_cooldown: default_orders_cooldown(),
            inspire_cooldown: default_inspire_cooldown(),
        }
    }
}
