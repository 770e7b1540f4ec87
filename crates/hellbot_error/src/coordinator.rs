//! Errors surfaced by the cache coordinator to its consumers.

use crate::{FetchError, StorageError};

/// Result type for coordinator operations.
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

/// Why the coordinator could not produce the current orders.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum CoordinatorErrorKind {
    /// Remote fetch failed; the cache was left untouched
    #[display("Fetch failed: {}", _0)]
    #[from(FetchError)]
    FetchFailed(FetchError),
    /// The store failed; no partial writes were committed
    #[display("Storage failed: {}", _0)]
    #[from(StorageError)]
    Storage(StorageError),
}

/// Coordinator error with location tracking.
///
/// # Examples
///
/// ```
/// use hellbot_error::{CoordinatorError, CoordinatorErrorKind, FetchError, FetchErrorKind};
///
/// let err: CoordinatorError = FetchError::new(FetchErrorKind::Status(500)).into();
/// assert!(err.is_fetch_failure());
/// assert!(matches!(err.kind, CoordinatorErrorKind::FetchFailed(_)));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Coordinator Error: {} at line {} in {}", kind, line, file)]
pub struct CoordinatorError {
    /// The kind of error that occurred
    pub kind: CoordinatorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CoordinatorError {
    /// Create a new coordinator error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CoordinatorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the remote source failed (recoverable; try again later).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self.kind, CoordinatorErrorKind::FetchFailed(_))
    }

    /// True when the store failed (fatal to the current invocation).
    pub fn is_storage_failure(&self) -> bool {
        matches!(self.kind, CoordinatorErrorKind::Storage(_))
    }
}

impl From<FetchError> for CoordinatorError {
    #[track_caller]
    fn from(err: FetchError) -> Self {
        Self::new(err.into())
    }
}

impl From<StorageError> for CoordinatorError {
    #[track_caller]
    fn from(err: StorageError) -> Self {
        Self::new(err.into())
    }
}
