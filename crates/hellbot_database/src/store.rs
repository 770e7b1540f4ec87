//! Async [`OrderStore`] over a single SQLite connection.

use crate::orders as queries;
use crate::{DatabaseConfig, establish_connection, establish_in_memory};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::sqlite::SqliteConnection;
use hellbot_core::{MajorOrder, ParsedOrder};
use hellbot_error::{StorageError, StorageErrorKind, StorageResult};
use hellbot_interface::{OrderStore, ReconcileSummary, UpsertOutcome};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;

/// SQLite-backed order cache.
///
/// All access goes through one connection behind an async mutex. The
/// blocking diesel call runs on the blocking pool while the task holds an
/// owned guard, so a caller that is cancelled mid-operation cannot release
/// the connection before its transaction has finished.
#[derive(Clone)]
pub struct SqliteOrderStore {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl std::fmt::Debug for SqliteOrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteOrderStore").finish_non_exhaustive()
    }
}

impl SqliteOrderStore {
    /// Open (or create) the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open(config: &DatabaseConfig) -> StorageResult<Self> {
        Ok(Self::from_connection(establish_connection(config)?))
    }

    /// A private in-memory store, mostly for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite cannot be opened or migrated.
    pub fn in_memory() -> StorageResult<Self> {
        Ok(Self::from_connection(establish_in_memory()?))
    }

    /// Wrap an already migrated connection.
    pub fn from_connection(conn: SqliteConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Number of rows ever stored for `order_id`, active or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn row_count(&self, order_id: i64) -> StorageResult<i64> {
        self.with_connection(move |conn| queries::count_rows(conn, order_id))
            .await
    }

    async fn with_connection<T, F>(&self, op: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> StorageResult<T> + Send + 'static,
    {
        let mut guard = Arc::clone(&self.conn).lock_owned().await;
        tokio::task::spawn_blocking(move || op(&mut *guard))
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::Unavailable(format!(
                    "Storage task join error: {}",
                    e
                )))
            })?
    }
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    #[instrument(skip(self))]
    async fn get_active(&self) -> StorageResult<Vec<MajorOrder>> {
        self.with_connection(queries::load_active).await
    }

    #[instrument(skip(self))]
    async fn get_known_ids(&self) -> StorageResult<BTreeSet<i64>> {
        self.with_connection(queries::load_known_ids).await
    }

    #[instrument(skip(self, order), fields(order_id = order.order_id()))]
    async fn upsert_seen(
        &self,
        order: &ParsedOrder,
        now: DateTime<Utc>,
    ) -> StorageResult<UpsertOutcome> {
        let order = order.clone();
        self.with_connection(move |conn| queries::upsert_seen(conn, &order, now))
            .await
    }

    #[instrument(skip(self, orders), fields(count = orders.len()))]
    async fn upsert_batch(
        &self,
        orders: &[ParsedOrder],
        retire_missing: bool,
        now: DateTime<Utc>,
    ) -> StorageResult<ReconcileSummary> {
        let batch = orders.to_vec();
        self.with_connection(move |conn| {
            queries::reconcile_batch(conn, &batch, retire_missing, now)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn sweep_expired(&self, now: DateTime<Utc>) -> StorageResult<usize> {
        self.with_connection(move |conn| queries::sweep_expired(conn, now))
            .await
    }
}
