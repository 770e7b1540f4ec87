//! Core data types for hellbot.
//!
//! - [`MajorOrder`] is one stored Major Order record with its lifecycle flag.
//! - [`ParsedOrder`] is a validated record fresh from the remote source,
//!   not yet reconciled into storage.
//! - [`parse_major_orders`] turns the raw assignment payload into
//!   [`ParsedOrder`]s, skipping malformed elements individually.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod order;
mod parser;
mod reward;
mod timestamp;

pub use order::{MajorOrder, MajorOrderBuilder, ParsedOrder, ParsedOrderBuilder};
pub use parser::{ParsedBatch, parse_major_order, parse_major_orders};
pub use reward::{NO_REWARD_TYPE_INDEX, RewardType};
pub use timestamp::{format_timestamp, parse_timestamp};
