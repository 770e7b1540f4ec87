//! Results returned by the coordinator.

use derive_getters::Getters;
use hellbot_core::MajorOrder;
use hellbot_error::ParseError;
use hellbot_interface::ReconcileSummary;
use serde::{Deserialize, Serialize};

/// Where the orders in a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotSource {
    /// Cached data was fresh; the remote source was not contacted
    Cache,
    /// A fetch succeeded and was reconciled into the store
    Remote,
    /// A fetch failed and the last-known-good cache was served instead
    StaleFallback,
}

/// What one refresh did.
#[derive(Debug, Clone, Default, Getters)]
pub struct RefreshReport {
    /// Store write totals
    summary: ReconcileSummary,
    /// Payload elements that failed to parse
    rejected: Vec<ParseError>,
    /// Parsed orders dropped because they had already expired
    dropped_expired: usize,
    /// Order ids seen before, retired, and now listed again
    reappeared: Vec<i64>,
}

impl RefreshReport {
    pub(crate) fn new(
        summary: ReconcileSummary,
        rejected: Vec<ParseError>,
        dropped_expired: usize,
        reappeared: Vec<i64>,
    ) -> Self {
        Self {
            summary,
            rejected,
            dropped_expired,
            reappeared,
        }
    }

    /// True when every payload element parsed.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// The current active orders and how they were obtained.
#[derive(Debug, Clone, Getters)]
pub struct OrderSnapshot {
    /// Active orders in insertion order
    orders: Vec<MajorOrder>,
    /// Provenance of `orders`
    source: SnapshotSource,
    /// Refresh details; empty unless `source` is [`SnapshotSource::Remote`]
    report: RefreshReport,
}

impl OrderSnapshot {
    pub(crate) fn new(orders: Vec<MajorOrder>, source: SnapshotSource, report: RefreshReport) -> Self {
        Self {
            orders,
            source,
            report,
        }
    }

    pub(crate) fn cached(orders: Vec<MajorOrder>) -> Self {
        Self::new(orders, SnapshotSource::Cache, RefreshReport::default())
    }

    /// Take the orders.
    pub fn into_orders(self) -> Vec<MajorOrder> {
        self.orders
    }
}
