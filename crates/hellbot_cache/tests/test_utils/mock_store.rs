//! Store doubles that fail or stall.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hellbot_core::{MajorOrder, ParsedOrder};
use hellbot_error::{StorageError, StorageErrorKind, StorageResult};
use hellbot_interface::{OrderStore, ReconcileSummary, UpsertOutcome};
use std::collections::BTreeSet;
use std::time::Duration;

fn io_failure<T>() -> StorageResult<T> {
    Err(StorageError::new(StorageErrorKind::Query(
        "disk I/O error".to_string(),
    )))
}

/// A store whose every operation fails.
pub struct FailingStore;

#[async_trait]
impl OrderStore for FailingStore {
    async fn get_active(&self) -> StorageResult<Vec<MajorOrder>> {
        io_failure()
    }

    async fn get_known_ids(&self) -> StorageResult<BTreeSet<i64>> {
        io_failure()
    }

    async fn upsert_seen(
        &self,
        _order: &ParsedOrder,
        _now: DateTime<Utc>,
    ) -> StorageResult<UpsertOutcome> {
        io_failure()
    }

    async fn upsert_batch(
        &self,
        _orders: &[ParsedOrder],
        _retire_missing: bool,
        _now: DateTime<Utc>,
    ) -> StorageResult<ReconcileSummary> {
        io_failure()
    }

    async fn sweep_expired(&self, _now: DateTime<Utc>) -> StorageResult<usize> {
        io_failure()
    }
}

/// A store that stalls on every operation.
pub struct SlowStore {
    pub delay: Duration,
}

#[async_trait]
impl OrderStore for SlowStore {
    async fn get_active(&self) -> StorageResult<Vec<MajorOrder>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn get_known_ids(&self) -> StorageResult<BTreeSet<i64>> {
        tokio::time::sleep(self.delay).await;
        Ok(BTreeSet::new())
    }

    async fn upsert_seen(
        &self,
        _order: &ParsedOrder,
        _now: DateTime<Utc>,
    ) -> StorageResult<UpsertOutcome> {
        tokio::time::sleep(self.delay).await;
        Ok(UpsertOutcome::Inserted)
    }

    async fn upsert_batch(
        &self,
        _orders: &[ParsedOrder],
        _retire_missing: bool,
        _now: DateTime<Utc>,
    ) -> StorageResult<ReconcileSummary> {
        tokio::time::sleep(self.delay).await;
        Ok(ReconcileSummary::default())
    }

    async fn sweep_expired(&self, _now: DateTime<Utc>) -> StorageResult<usize> {
        tokio::time::sleep(self.delay).await;
        Ok(0)
    }
}
