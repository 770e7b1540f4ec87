//! SQLite cache store for Major Orders.
//!
//! Records live in the `major_orders` table. Every order id may have many
//! historical rows but at most one active row; a partial unique index makes
//! that a database constraint rather than a convention.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod connection;
mod conversions;
mod models;
mod orders;
mod store;

#[allow(missing_docs)]
pub mod schema;

pub use config::DatabaseConfig;
pub use connection::{MIGRATIONS, establish_connection, establish_in_memory, run_migrations};
pub use conversions::{
    FETCHED_RESPONSE_CODE, parsed_to_new_row, parsed_to_refresh, row_to_major_order,
};
pub use models::{MajorOrderRow, NewMajorOrderRow, RefreshMajorOrderRow};
pub use orders::{
    count_rows, load_active, load_known_ids, reconcile_batch, sweep_expired, upsert_seen,
};
pub use store::SqliteOrderStore;
