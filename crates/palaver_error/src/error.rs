//! Top-level error wrapper types.

use crate::{CatalogError, ConfigError, StoryError};

/// Every error condition a Palaver crate can surface.
///
/// # Examples
///
/// ```
/// use palaver_error::{ConfigError, ConfigErrorKind, PalaverError};
///
/// let err: PalaverError = ConfigError::new(ConfigErrorKind::Merge("bad layer".into())).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PalaverErrorKind {
    /// Story builder error
    #[from(StoryError)]
    Story(StoryError),
    /// Candidate catalog error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Palaver error with kind discrimination.
///
/// # Examples
///
/// ```
/// use palaver_error::{CatalogError, CatalogErrorKind, PalaverErrorKind, PalaverResult};
///
/// fn lookup() -> PalaverResult<()> {
///     Err(CatalogError::new(CatalogErrorKind::Unavailable("offline".into())))?
/// }
///
/// let err = lookup().unwrap_err();
/// assert!(matches!(err.kind(), PalaverErrorKind::Catalog(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Palaver Error: {}", _0)]
pub struct PalaverError(Box<PalaverErrorKind>);

impl PalaverError {
    /// Create a new error from a kind.
    pub fn new(kind: PalaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PalaverErrorKind {
        &self.0
    }
}

impl<T> From<T> for PalaverError
where
    T: Into<PalaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Palaver operations.
pub type PalaverResult<T> = std::result::Result<T, PalaverError>;
