//! Collaborator traits.

use crate::{FetchResponse, ReconcileSummary, UpsertOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hellbot_core::{MajorOrder, ParsedOrder};
use hellbot_error::{FetchResult, StorageResult};
use std::collections::BTreeSet;

/// Remote source of Major Orders.
///
/// Implementations return the status the source answered with; only a
/// failure to obtain any response is an error here.
#[async_trait]
pub trait OrderFetcher: Send + Sync {
    /// Fetch `query` (e.g. `"assignments"`) from the source.
    async fn fetch(&self, query: &str) -> FetchResult<FetchResponse>;
}

/// Durable store of Major Order records with an active/inactive lifecycle.
///
/// Every write runs as one atomic unit: it completes fully or not at all,
/// and concurrent writers are serialised so two reconciliations can never
/// interleave a duplicate insert for the same `order_id`.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Active records in storage insertion order.
    async fn get_active(&self) -> StorageResult<Vec<MajorOrder>>;

    /// Every `order_id` ever stored, active or inactive.
    async fn get_known_ids(&self) -> StorageResult<BTreeSet<i64>>;

    /// Insert `order` as a new active record, or refresh the active record
    /// with the same `order_id`. Inactive rows are never reactivated.
    async fn upsert_seen(
        &self,
        order: &ParsedOrder,
        now: DateTime<Utc>,
    ) -> StorageResult<UpsertOutcome>;

    /// Upsert every order in one transaction. With `retire_missing`, active
    /// records whose `order_id` is not among `orders` are deactivated in the
    /// same transaction.
    async fn upsert_batch(
        &self,
        orders: &[ParsedOrder],
        retire_missing: bool,
        now: DateTime<Utc>,
    ) -> StorageResult<ReconcileSummary>;

    /// Deactivate every active record whose expiration is at or before
    /// `now`. Returns how many records were deactivated.
    async fn sweep_expired(&self, now: DateTime<Utc>) -> StorageResult<usize>;
}
