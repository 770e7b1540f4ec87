//! Error types for hellbot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The three failure categories of the order cache map onto:
//! - [`FetchError`] - the remote source failed (transport, timeout, non-200)
//! - [`ParseError`] - one payload element was malformed
//! - [`StorageError`] - the durable store failed
//!
//! [`CoordinatorError`] is what consumers of the cache receive.
//!
//! # Examples
//!
//! ```
//! use hellbot_error::{FetchError, FetchErrorKind, HellbotResult};
//!
//! fn fetch_orders() -> HellbotResult<String> {
//!     Err(FetchError::new(FetchErrorKind::Status(503)))?
//! }
//!
//! assert!(fetch_orders().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod coordinator;
mod error;
mod fetch;
mod http;
mod parse;
mod storage;

pub use config::{ConfigError, ConfigErrorKind};
pub use coordinator::{CoordinatorError, CoordinatorErrorKind, CoordinatorResult};
pub use error::{HellbotError, HellbotErrorKind, HellbotResult};
pub use fetch::{FetchError, FetchErrorKind, FetchResult};
pub use http::HttpError;
pub use parse::{ParseError, ParseErrorKind};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
