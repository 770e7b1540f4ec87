//! Payload parse error types.

/// Ways a single order payload element can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ParseErrorKind {
    /// Element is not a JSON object
    #[display("Element is not an object")]
    NotAnObject,
    /// A required field is absent or null
    #[display("Missing required field '{}'", _0)]
    MissingField(String),
    /// The element does not deserialize into the assignment shape
    #[display("Malformed assignment: {}", _0)]
    Malformed(String),
    /// A field is present but has an unusable value
    #[display("Invalid field '{}': {}", field, reason)]
    InvalidField {
        /// Field name
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Malformed payload element with its position and location tracking.
///
/// Parse errors are recovered locally: the element is dropped and the rest
/// of the batch continues.
///
/// # Examples
///
/// ```
/// use hellbot_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(2, ParseErrorKind::MissingField("briefing".to_string()));
/// assert_eq!(err.index, 2);
/// assert!(format!("{}", err).contains("briefing"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed Payload: element {}: {} at line {} in {}", index, kind, line, file)]
pub struct ParseError {
    /// Position of the element in the remote sequence
    pub index: usize,
    /// The kind of error that occurred
    pub kind: ParseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ParseError {
    /// Create a new parse error with automatic location tracking.
    #[track_caller]
    pub fn new(index: usize, kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            index,
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
