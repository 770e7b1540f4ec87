//! Remote fetch error types.

/// Result type for remote fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Kinds of remote fetch failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FetchErrorKind {
    /// The remote source answered with a non-200 status
    #[display("Unexpected HTTP status: {}", _0)]
    Status(u16),
    /// The request never produced a response (DNS, TLS, connection reset)
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The request did not complete within the allotted time (milliseconds)
    #[display("Timed out after {} ms", _0)]
    Timeout(u64),
    /// The response body could not be interpreted as an order payload
    #[display("Invalid response body: {}", _0)]
    InvalidBody(String),
}

/// Remote fetch error with location tracking.
///
/// # Examples
///
/// ```
/// use hellbot_error::{FetchError, FetchErrorKind};
///
/// let err = FetchError::new(FetchErrorKind::Status(500));
/// assert_eq!(err.status(), Some(500));
/// assert!(format!("{}", err).contains("500"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP status code, when the failure was a non-200 response.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FetchErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }
}
