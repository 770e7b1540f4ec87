//! Storage error types.

/// Result type for cache store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Could not open or configure the storage medium
    #[display("Storage connection error: {}", _0)]
    Connection(String),
    /// Statement execution failed
    #[display("Storage query error: {}", _0)]
    Query(String),
    /// A write would break a uniqueness or not-null constraint
    #[display("Constraint violation: {}", _0)]
    ConstraintViolation(String),
    /// Schema migration failed
    #[display("Migration error: {}", _0)]
    Migration(String),
    /// A stored value could not be converted back into a record
    #[display("Serialization error: {}", _0)]
    Serialization(String),
    /// The storage worker could not be reached
    #[display("Storage unavailable: {}", _0)]
    Unavailable(String),
    /// The operation did not complete within the allotted time (milliseconds)
    #[display("Storage operation timed out after {} ms", _0)]
    Timeout(u64),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use hellbot_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Query("no such table".to_string()));
/// assert!(format!("{}", err).contains("no such table"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

// Diesel error conversions (only available with database feature)
#[cfg(feature = "database")]
impl From<diesel::result::Error> for StorageError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            | Error::DatabaseError(DatabaseErrorKind::NotNullViolation, info)
            | Error::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
                StorageError::new(StorageErrorKind::ConstraintViolation(
                    info.message().to_string(),
                ))
            }
            _ => StorageError::new(StorageErrorKind::Query(err.to_string())),
        }
    }
}

#[cfg(feature = "database")]
impl From<diesel::ConnectionError> for StorageError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        StorageError::new(StorageErrorKind::Connection(err.to_string()))
    }
}
