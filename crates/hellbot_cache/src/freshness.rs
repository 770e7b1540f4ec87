//! Freshness policy.

use crate::CoordinatorConfig;
use chrono::{DateTime, Duration, Utc};
use hellbot_core::MajorOrder;

/// Default freshness window: 24 hours.
pub const DEFAULT_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Decides whether cached orders are authoritative or must be re-fetched.
///
/// Pure: no I/O, no clock of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    max_age: Duration,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self::from_secs(DEFAULT_MAX_AGE_SECS)
    }
}

impl FreshnessPolicy {
    /// Policy that tolerates records up to `max_age` old.
    pub fn new(max_age: Duration) -> Self {
        Self { max_age }
    }

    /// Policy from a window in seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self::new(
            i64::try_from(secs)
                .ok()
                .and_then(Duration::try_seconds)
                .unwrap_or(Duration::MAX),
        )
    }

    /// Policy matching a coordinator configuration.
    pub fn from_config(config: &CoordinatorConfig) -> Self {
        Self::from_secs(*config.max_age_secs())
    }

    /// The tolerated age.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Whether `snapshot` must be refreshed from the remote source.
    ///
    /// True when the snapshot is empty, or when the oldest `last_fetched`
    /// among its records is more than `max_age` before `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use hellbot_cache::FreshnessPolicy;
    ///
    /// assert!(FreshnessPolicy::default().needs_refresh(&[], Utc::now()));
    /// ```
    pub fn needs_refresh(&self, snapshot: &[MajorOrder], now: DateTime<Utc>) -> bool {
        match snapshot.iter().map(|order| *order.last_fetched()).min() {
            None => true,
            Some(oldest) => now - oldest > self.max_age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hellbot_core::MajorOrderBuilder;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 28, 12, 0, 0).unwrap()
    }

    fn fetched(id: i64, last_fetched: DateTime<Utc>) -> MajorOrder {
        MajorOrderBuilder::default()
            .row_id(id as i32)
            .order_id(id)
            .briefing("Hold the line")
            .expiration(now() + Duration::days(3))
            .last_fetched(last_fetched)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_snapshot_needs_refresh() {
        let policy = FreshnessPolicy::default();
        assert!(policy.needs_refresh(&[], now()));
        assert!(policy.needs_refresh(&[], Utc.timestamp_opt(0, 0).unwrap()));
    }

    #[test]
    fn test_stale_after_max_age() {
        let policy = FreshnessPolicy::default();
        let snapshot = [fetched(1, now() - Duration::hours(25))];
        assert!(policy.needs_refresh(&snapshot, now()));
    }

    #[test]
    fn test_fresh_within_max_age() {
        let policy = FreshnessPolicy::default();
        let snapshot = [fetched(1, now() - Duration::hours(1))];
        assert!(!policy.needs_refresh(&snapshot, now()));
    }

    #[test]
    fn test_exactly_max_age_is_fresh() {
        let policy = FreshnessPolicy::default();
        let snapshot = [fetched(1, now() - Duration::hours(24))];
        assert!(!policy.needs_refresh(&snapshot, now()));
    }

    #[test]
    fn test_oldest_record_decides() {
        let policy = FreshnessPolicy::default();
        let snapshot = [
            fetched(1, now() - Duration::minutes(5)),
            fetched(2, now() - Duration::hours(30)),
        ];
        assert!(policy.needs_refresh(&snapshot, now()));
    }

    #[test]
    fn test_custom_window() {
        let policy = FreshnessPolicy::from_secs(60);
        let snapshot = [fetched(1, now() - Duration::seconds(61))];
        assert!(policy.needs_refresh(&snapshot, now()));
        assert_eq!(policy.max_age(), Duration::seconds(60));
    }
}
