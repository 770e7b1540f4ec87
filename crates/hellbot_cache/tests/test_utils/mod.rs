//! Shared test doubles for coordinator tests.

mod mock_fetcher;
mod mock_store;

pub use mock_fetcher::{MockBehavior, MockFetcher};
pub use mock_store::{FailingStore, SlowStore};
