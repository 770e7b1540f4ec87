//! Freshness policy and cache coordination for Major Orders.
//!
//! [`CacheCoordinator`] is the single entry point consumers call for "the
//! current orders". Each invocation sweeps expired records, consults the
//! [`FreshnessPolicy`], and only when the cache is stale fetches, parses
//! and reconciles a fresh batch into the store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod coordinator;
mod freshness;
mod snapshot;

pub use config::{CoordinatorConfig, CoordinatorConfigBuilder};
pub use coordinator::CacheCoordinator;
pub use freshness::{DEFAULT_MAX_AGE_SECS, FreshnessPolicy};
pub use snapshot::{OrderSnapshot, RefreshReport, SnapshotSource};
