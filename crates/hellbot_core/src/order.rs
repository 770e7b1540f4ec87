//! Major Order records.

use crate::RewardType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated Major Order as reported by the remote source.
///
/// Produced by the payload parser and handed to the cache store for
/// reconciliation. `reward_amount` is already normalised (never negative).
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use hellbot_core::{ParsedOrderBuilder, RewardType};
///
/// let now = Utc::now();
/// let order = ParsedOrderBuilder::default()
///     .order_id(1)
///     .briefing("Liberate Malevelon Creek")
///     .reward_type_index(1)
///     .reward_amount(50)
///     .expiration(now + Duration::hours(48))
///     .build()
///     .unwrap();
///
/// assert_eq!(order.reward_type(), RewardType::Medals);
/// assert!(!order.is_expired(now));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct ParsedOrder {
    /// Identifier assigned by the remote source
    order_id: i64,
    /// Text description
    #[builder(setter(into))]
    briefing: String,
    /// Remote reward type code, `-1` when none was given
    #[builder(default = "crate::NO_REWARD_TYPE_INDEX")]
    reward_type_index: i64,
    /// Reward amount, `0` when the source omitted it
    #[builder(default)]
    reward_amount: u64,
    /// Instant after which the order is no longer valid
    expiration: DateTime<Utc>,
}

impl ParsedOrder {
    /// Assemble an order from already validated fields.
    pub fn new(
        order_id: i64,
        briefing: impl Into<String>,
        reward_type_index: i64,
        reward_amount: u64,
        expiration: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id,
            briefing: briefing.into(),
            reward_type_index,
            reward_amount,
            expiration,
        }
    }

    /// Display label for the reward.
    pub fn reward_type(&self) -> RewardType {
        RewardType::from_index(self.reward_type_index)
    }

    /// Seconds until expiration; negative once expired.
    pub fn ttl(&self, now: DateTime<Utc>) -> i64 {
        (self.expiration - now).num_seconds()
    }

    /// Whether the order has reached its expiration.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration <= now
    }
}

/// A Major Order record held by the cache store.
///
/// Records stay in storage after they go inactive; inactive rows are
/// history and are never reactivated.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct MajorOrder {
    /// Storage row identifier (insertion order)
    row_id: i32,
    /// Identifier assigned by the remote source
    order_id: i64,
    /// Text description
    #[builder(setter(into))]
    briefing: String,
    /// Remote reward type code, `-1` when none was given
    #[builder(default = "crate::NO_REWARD_TYPE_INDEX")]
    reward_type_index: i64,
    /// Reward amount, never negative
    #[builder(default)]
    reward_amount: u64,
    /// Display label derived from `reward_type_index`
    #[builder(default = "RewardType::NotApplicable")]
    reward_type: RewardType,
    /// Instant after which the order is no longer valid
    expiration: DateTime<Utc>,
    /// When the order was last confirmed present in a remote response
    last_fetched: DateTime<Utc>,
    /// False once expired or gone from the remote source
    #[builder(default = "true")]
    active: bool,
}

impl MajorOrder {
    /// Seconds until expiration; negative once expired.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use hellbot_core::MajorOrderBuilder;
    ///
    /// let now = Utc::now();
    /// let order = MajorOrderBuilder::default()
    ///     .row_id(1)
    ///     .order_id(7)
    ///     .briefing("Hold the line")
    ///     .expiration(now - Duration::hours(1))
    ///     .last_fetched(now - Duration::hours(2))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(order.ttl(now), -3600);
    /// assert!(order.is_expired(now));
    /// ```
    pub fn ttl(&self, now: DateTime<Utc>) -> i64 {
        (self.expiration - now).num_seconds()
    }

    /// Whether the order has reached its expiration.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration <= now
    }

    /// Time elapsed since the order was last confirmed by the remote source.
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.last_fetched
    }
}
