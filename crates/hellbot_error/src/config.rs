//! Configuration error types.

/// Stage of configuration loading that failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source (bundled, user or local file) could not be read
    #[display("unreadable source: {}", _0)]
    Source(String),
    /// `HELLBOT__*` or `SUPER_*` overrides could not be applied
    #[display("environment override failed: {}", _0)]
    Environment(String),
    /// The merged sources do not deserialize into the settings tree
    #[display("invalid value: {}", _0)]
    Invalid(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use hellbot_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Invalid("cache.max_age_secs".into()));
/// assert!(format!("{}", err).contains("cache.max_age_secs"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// Which loading stage failed
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Wrap `kind` with the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
