//! Top-level error wrapper types.

use crate::{ConfigError, CoordinatorError, FetchError, HttpError, ParseError, StorageError};

/// Every error condition hellbot can report.
///
/// # Examples
///
/// ```
/// use hellbot_error::{HellbotError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: HellbotError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HellbotErrorKind {
    /// HTTP client construction error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote fetch error
    #[from(FetchError)]
    Fetch(FetchError),
    /// Malformed payload element
    #[from(ParseError)]
    Parse(ParseError),
    /// Cache store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Cache coordinator error
    #[from(CoordinatorError)]
    Coordinator(CoordinatorError),
}

/// hellbot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use hellbot_error::{ConfigError, ConfigErrorKind, HellbotResult};
///
/// fn might_fail() -> HellbotResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Invalid("api.endpoint".into())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hellbot Error: {}", _0)]
pub struct HellbotError(Box<HellbotErrorKind>);

impl HellbotError {
    /// Create a new error from a kind.
    pub fn new(kind: HellbotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HellbotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HellbotErrorKind
impl<T> From<T> for HellbotError
where
    T: Into<HellbotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for hellbot operations.
pub type HellbotResult<T> = std::result::Result<T, HellbotError>;
