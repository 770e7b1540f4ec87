//! The cache coordinator.

use crate::{CoordinatorConfig, FreshnessPolicy, OrderSnapshot, RefreshReport, SnapshotSource};
use chrono::{DateTime, Utc};
use hellbot_core::{MajorOrder, ParsedOrder, parse_major_orders};
use hellbot_error::{
    CoordinatorError, CoordinatorResult, FetchError, FetchErrorKind, StorageError,
    StorageErrorKind, StorageResult,
};
use hellbot_interface::{Clock, OrderFetcher, OrderStore};
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

/// Orchestrates fetcher, parser and store under the freshness policy.
///
/// Every invocation sweeps expired records before looking at the cache, so
/// an expired order is never returned as active. Stale invocations
/// serialise on a refresh lock and re-check freshness once they hold it:
/// concurrent callers that all found the cache stale share a single remote
/// fetch. The fetch runs without any storage lock held, and the fetched
/// batch is written in one store transaction.
pub struct CacheCoordinator {
    fetcher: Arc<dyn OrderFetcher>,
    store: Arc<dyn OrderStore>,
    clock: Arc<dyn Clock>,
    policy: FreshnessPolicy,
    config: CoordinatorConfig,
    refresh_lock: Mutex<()>,
}

impl std::fmt::Debug for CacheCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheCoordinator")
            .field("policy", &self.policy)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CacheCoordinator {
    /// Create a coordinator whose freshness window comes from `config`.
    pub fn new(
        fetcher: Arc<dyn OrderFetcher>,
        store: Arc<dyn OrderStore>,
        clock: Arc<dyn Clock>,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            fetcher,
            store,
            clock,
            policy: FreshnessPolicy::from_config(&config),
            config,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Replace the freshness policy.
    pub fn with_policy(mut self, policy: FreshnessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Freshness policy in use.
    pub fn policy(&self) -> &FreshnessPolicy {
        &self.policy
    }

    /// The current active orders.
    ///
    /// # Errors
    ///
    /// Returns a fetch failure when a refresh was needed and the remote
    /// source failed (unless stale fallback is enabled and cached orders
    /// exist), or a storage failure when the store failed.
    pub async fn get_current_orders(&self) -> CoordinatorResult<Vec<MajorOrder>> {
        Ok(self.current_orders().await?.into_orders())
    }

    /// The current active orders together with their provenance.
    ///
    /// # Errors
    ///
    /// See [`CacheCoordinator::get_current_orders`].
    #[instrument(skip(self))]
    pub async fn current_orders(&self) -> CoordinatorResult<OrderSnapshot> {
        let (snapshot, now) = self.swept_snapshot().await?;
        if !self.policy.needs_refresh(&snapshot, now) {
            debug!(count = snapshot.len(), "Serving cached orders");
            return Ok(OrderSnapshot::cached(snapshot));
        }

        let _refresh = self.refresh_lock.lock().await;

        // Another caller may have refreshed while this one waited.
        let (snapshot, now) = self.swept_snapshot().await?;
        if !self.policy.needs_refresh(&snapshot, now) {
            debug!(count = snapshot.len(), "Cache refreshed by concurrent caller");
            return Ok(OrderSnapshot::cached(snapshot));
        }

        debug!(count = snapshot.len(), "Cache stale, refreshing");
        self.refresh(snapshot, now).await
    }

    /// Deactivate every expired active order.
    ///
    /// # Errors
    ///
    /// Returns a storage failure if the sweep could not complete.
    #[instrument(skip(self))]
    pub async fn sweep(&self) -> CoordinatorResult<usize> {
        let now = self.clock.now();
        let swept = self.storage(self.store.sweep_expired(now)).await?;
        info!(swept, "Swept expired orders");
        Ok(swept)
    }

    async fn swept_snapshot(&self) -> CoordinatorResult<(Vec<MajorOrder>, DateTime<Utc>)> {
        let now = self.clock.now();
        self.storage(self.store.sweep_expired(now)).await?;
        let snapshot = self.storage(self.store.get_active()).await?;
        Ok((snapshot, now))
    }

    async fn refresh(
        &self,
        snapshot: Vec<MajorOrder>,
        now: DateTime<Utc>,
    ) -> CoordinatorResult<OrderSnapshot> {
        let elements = match self.fetch().await {
            Ok(elements) => elements,
            Err(err) => return self.fall_back(snapshot, err),
        };

        let batch = parse_major_orders(&elements);
        let clean = batch.is_clean();
        let (live, expired): (Vec<ParsedOrder>, Vec<ParsedOrder>) =
            batch.orders.into_iter().partition(|order| !order.is_expired(now));
        if !expired.is_empty() {
            debug!(count = expired.len(), "Dropping already expired orders");
        }

        let known = self.storage(self.store.get_known_ids()).await?;
        let reappeared = reappeared_ids(&live, &snapshot, &known);
        for order_id in &reappeared {
            info!(order_id, "Previously retired order is listed again");
        }

        // A rejected element may be a still-live order; keep its row.
        let retire = *self.config.retire_missing() && clean;
        if *self.config.retire_missing() && !clean {
            warn!(
                rejected = batch.rejected.len(),
                "Skipping retirement of missing orders for partially parsed batch"
            );
        }

        let summary = self
            .storage(self.store.upsert_batch(&live, retire, now))
            .await?;
        let orders = self.storage(self.store.get_active()).await?;

        info!(
            active = orders.len(),
            inserted = summary.inserted,
            refreshed = summary.refreshed,
            retired = summary.retired,
            rejected = batch.rejected.len(),
            "Refreshed orders from remote source"
        );

        let report = RefreshReport::new(summary, batch.rejected, expired.len(), reappeared);
        Ok(OrderSnapshot::new(orders, SnapshotSource::Remote, report))
    }

    async fn fetch(&self) -> Result<Vec<JsonValue>, FetchError> {
        let timeout = self.config.fetch_timeout();
        let response =
            match tokio::time::timeout(timeout, self.fetcher.fetch(self.config.query())).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(FetchError::new(FetchErrorKind::Timeout(millis(timeout))));
                }
            };

        match response.into_payload()? {
            JsonValue::Array(elements) => Ok(elements),
            other => Err(FetchError::new(FetchErrorKind::InvalidBody(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )))),
        }
    }

    fn fall_back(
        &self,
        snapshot: Vec<MajorOrder>,
        err: FetchError,
    ) -> CoordinatorResult<OrderSnapshot> {
        error!(error = %err.kind, "Failed to fetch orders");
        if *self.config.serve_stale_on_fetch_failure() && !snapshot.is_empty() {
            warn!(count = snapshot.len(), "Serving stale cached orders");
            return Ok(OrderSnapshot::new(
                snapshot,
                SnapshotSource::StaleFallback,
                RefreshReport::default(),
            ));
        }
        Err(CoordinatorError::from(err))
    }

    async fn storage<T, F>(&self, op: F) -> CoordinatorResult<T>
    where
        F: Future<Output = StorageResult<T>>,
    {
        let timeout = self.config.storage_timeout();
        match tokio::time::timeout(timeout, op).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                error!(timeout_ms = millis(timeout), "Storage operation timed out");
                Err(StorageError::new(StorageErrorKind::Timeout(millis(timeout))).into())
            }
        }
    }
}

/// Live order ids that were stored before but have no active row now.
fn reappeared_ids(
    live: &[ParsedOrder],
    snapshot: &[MajorOrder],
    known: &BTreeSet<i64>,
) -> Vec<i64> {
    let active: BTreeSet<i64> = snapshot.iter().map(|order| *order.order_id()).collect();
    live.iter()
        .map(|order| *order.order_id())
        .filter(|id| known.contains(id) && !active.contains(id))
        .collect()
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
