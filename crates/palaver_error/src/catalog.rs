//! Candidate catalog error types.

/// Kinds of failures reported by a candidate catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// Backend could not be reached
    #[display("Catalog unavailable: {}", _0)]
    Unavailable(String),
    /// Backend answered with something that could not be interpreted
    #[display("Unexpected catalog response: {}", _0)]
    UnexpectedResponse(String),
}

/// Catalog error with location tracking.
///
/// # Examples
///
/// ```
/// use palaver_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::Unavailable("timeout".to_string()));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The kind of error that occurred
    pub kind: CatalogErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new catalog error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
