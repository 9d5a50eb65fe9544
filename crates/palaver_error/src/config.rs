//! Configuration error types.

/// Ways loading the layered `palaver.toml` configuration can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// An explicitly requested file could not be read
    #[display("Cannot read {}: {}", path, reason)]
    Read {
        /// File that was requested
        path: String,
        /// Underlying failure
        reason: String,
    },
    /// The bundled, home and working-directory layers could not be merged
    #[display("Cannot merge configuration layers: {}", _0)]
    Merge(String),
    /// `[parse] unknown_reference` names no known policy
    #[display("Unknown reference policy '{}' (expected \"drop\" or \"assume_action\")", _0)]
    InvalidPolicy(String),
    /// A value has the wrong type or shape
    #[display("Invalid configuration value: {}", _0)]
    Invalid(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use palaver_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::InvalidPolicy("guess".to_string()));
/// assert!(format!("{}", err).contains("'guess'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a configuration error at the caller's location.
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
