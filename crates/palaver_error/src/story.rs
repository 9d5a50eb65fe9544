//! Story builder error types.

/// Specific error conditions raised at the story builder boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Story name is empty or whitespace only
    #[display("Story name cannot be empty")]
    EmptyName,
    /// Submission attempted while the validator still reports problems
    #[display("Story has {} unresolved diagnostic(s)", count)]
    InvalidSequence {
        /// Number of outstanding diagnostics
        count: usize,
    },
    /// Failed to read a story definition file
    #[display("Failed to read story file: {}", _0)]
    FileRead(String),
    /// The submission payload could not be written out
    #[display("Failed to export story payload: {}", _0)]
    Export(String),
}

/// Error type for story builder operations.
///
/// # Examples
///
/// ```
/// use palaver_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::InvalidSequence { count: 2 });
/// assert!(format!("{}", err).contains("2 unresolved"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
