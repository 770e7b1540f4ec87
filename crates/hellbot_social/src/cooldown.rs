//! Per-user command cooldowns.

use crate::{BotCommand, CommandError, CommandErrorKind, CommandResult, CommandsConfig};
use derive_getters::Getters;
use governor::clock::{Clock, DefaultClock};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::debug;

/// At most `rate` uses every `per_secs` seconds, per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CooldownRule {
    /// Uses allowed per window
    rate: u32,
    /// Window length in seconds
    per_secs: u64,
}

impl CooldownRule {
    /// Allow `rate` uses every `per_secs` seconds.
    pub fn new(rate: u32, per_secs: u64) -> Self {
        Self { rate, per_secs }
    }

    /// The equivalent GCRA quota: a burst of `rate`, replenished evenly
    /// over the window.
    fn quota(&self, command: BotCommand) -> CommandResult<Quota> {
        let invalid = |reason: &str| {
            CommandError::new(CommandErrorKind::InvalidCooldown {
                command,
                reason: reason.to_string(),
            })
        };
        let burst = NonZeroU32::new(self.rate).ok_or_else(|| invalid("rate must be positive"))?;
        let period = Duration::from_secs(self.per_secs) / self.rate;
        Quota::with_period(period)
            .map(|quota| quota.allow_burst(burst))
            .ok_or_else(|| invalid("window must be positive"))
    }
}

/// Keyed rate limiters, one per command, keyed by user.
pub struct CommandCooldowns {
    limiters: HashMap<BotCommand, DefaultKeyedRateLimiter<String>>,
    clock: DefaultClock,
}

impl std::fmt::Debug for CommandCooldowns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandCooldowns")
            .field("commands", &self.limiters.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CommandCooldowns {
    /// Limiters for the given rules; commands without a rule are unlimited.
    ///
    /// # Errors
    ///
    /// Returns [`CommandErrorKind::InvalidCooldown`] for a zero rate or window.
    pub fn new(rules: impl IntoIterator<Item = (BotCommand, CooldownRule)>) -> CommandResult<Self> {
        let mut limiters = HashMap::new();
        for (command, rule) in rules {
            limiters.insert(command, RateLimiter::keyed(rule.quota(command)?));
        }
        Ok(Self {
            limiters,
            clock: DefaultClock::default(),
        })
    }

    /// Limiters for the configured `orders` and `inspire` rules.
    ///
    /// # Errors
    ///
    /// Returns [`CommandErrorKind::InvalidCooldown`] for a zero rate or window.
    pub fn from_config(config: &CommandsConfig) -> CommandResult<Self> {
        Self::new([
            (BotCommand::Orders, *config.orders_cooldown()),
            (BotCommand::Inspire, *config.inspire_cooldown()),
        ])
    }

    /// Record one use of `command` by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandErrorKind::Cooldown`] with the whole seconds to wait
    /// (at least one) when the user is over the limit.
    pub fn check(&self, command: BotCommand, user: &str) -> CommandResult<()> {
        let Some(limiter) = self.limiters.get(&command) else {
            return Ok(());
        };
        limiter.check_key(&user.to_string()).map_err(|not_until| {
            let retry_after_secs = not_until
                .wait_time_from(self.clock.now())
                .as_secs()
                .max(1);
            debug!(%command, user, retry_after_secs, "Command on cooldown");
            CommandError::new(CommandErrorKind::Cooldown {
                command,
                retry_after_secs,
            })
        })
    }

    /// Forget users whose limits have fully replenished.
    pub fn prune(&self) {
        for limiter in self.limiters.values() {
            limiter.retain_recent();
        }
    }
}
