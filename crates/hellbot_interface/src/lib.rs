//! Trait definitions for the collaborators of the order cache.
//!
//! - [`OrderFetcher`] - the remote game-status API
//! - [`OrderStore`] - durable storage of order records
//! - [`Clock`] - the source of "now", injectable for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod traits;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use traits::{OrderFetcher, OrderStore};
pub use types::{FetchResponse, ReconcileSummary, UpsertOutcome};
