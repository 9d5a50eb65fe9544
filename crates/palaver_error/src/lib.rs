//! Error types for the Palaver story builder.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use palaver_error::{PalaverResult, StoryError, StoryErrorKind};
//!
//! fn submit() -> PalaverResult<()> {
//!     Err(StoryError::new(StoryErrorKind::EmptyName))?
//! }
//!
//! assert!(submit().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod story;

pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{PalaverError, PalaverErrorKind, PalaverResult};
pub use story::{StoryError, StoryErrorKind};
