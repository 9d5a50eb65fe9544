//! Story builder settings: search timing and the scanner's fallback for
//! unknown references, read from `palaver.toml`.

use crate::UnknownReference;
use config::{Config, File, FileFormat};
use palaver_error::{ConfigError, ConfigErrorKind, PalaverResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument, warn};

const BUNDLED_CONFIG: &str = include_str!("../../../palaver.toml");
const USER_CONFIG: &str = ".config/palaver/palaver.toml";
const LOCAL_CONFIG: &str = "palaver";

/// Candidate search settings from the `[search]` section.
///
/// ```toml
/// [search]
/// debounce_ms = 300
/// min_query_len = 0
/// limit = 20
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct SearchConfig {
    /// Quiet period after a keystroke before the catalog is queried
    #[serde(default = "default_debounce_ms")]
    #[builder(default = "default_debounce_ms()")]
    debounce_ms: u64,

    /// Queries shorter than this resolve to no candidates
    #[serde(default)]
    #[builder(default)]
    min_query_len: usize,

    /// Maximum number of candidates requested from the catalog
    #[serde(default = "default_limit")]
    #[builder(default = "default_limit()")]
    limit: usize,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_limit() -> usize {
    20
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: 0,
            limit: default_limit(),
        }
    }
}

/// Definition scanning settings from the `[parse]` section.
///
/// ```toml
/// [parse]
/// unknown_reference = "drop"   # or "assume_action"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct ParseConfig {
    /// Fallback for `action:` references that are neither known actions nor
    /// known responses
    #[serde(default)]
    unknown_reference: UnknownReference,
}

/// Top-level Palaver configuration.
///
/// # Example
///
/// ```no_run
/// use palaver_story::PalaverConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PalaverConfig::load()?;
/// println!("debounce: {}ms", config.search().debounce_ms());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct PalaverConfig {
    /// Candidate search settings
    #[serde(default)]
    search: SearchConfig,

    /// Definition scanning settings
    #[serde(default)]
    parse: ParseConfig,
}

impl PalaverConfig {
    /// Reads a single configuration file, skipping the bundled and user
    /// layers. Sections missing from the file take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigErrorKind::Read`] if the file is missing or is not TOML, and
    /// the [`PalaverConfig::load`] validation errors otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PalaverResult<Self> {
        let path = path.as_ref();
        let layers = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Read {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            })?;
        Self::settle(layers)
    }

    /// The defaults shipped in the bundled `palaver.toml`.
    pub fn bundled() -> PalaverResult<Self> {
        let layers = Config::builder()
            .add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Merge(e.to_string())))?;
        Self::settle(layers)
    }

    /// Bundled defaults, overlaid by `~/.config/palaver/palaver.toml` and
    /// then `./palaver.toml`. Both overlays are optional.
    ///
    /// # Errors
    ///
    /// [`ConfigErrorKind::Merge`] if an overlay exists but cannot be read,
    /// [`ConfigErrorKind::InvalidPolicy`] for an unrecognized
    /// `unknown_reference`, [`ConfigErrorKind::Invalid`] for mistyped values.
    #[instrument]
    pub fn load() -> PalaverResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml));

        match dirs::home_dir() {
            Some(home) => {
                let user = home.join(USER_CONFIG);
                debug!(path = %user.display(), "Adding user configuration layer");
                builder = builder.add_source(File::from(user).required(false));
            }
            None => debug!("No home directory; skipping user configuration layer"),
        }

        let layers = builder
            .add_source(File::with_name(LOCAL_CONFIG).required(false))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Merge(e.to_string())))?;
        Self::settle(layers)
    }

    /// Checks the merged layers and deserializes them.
    fn settle(layers: Config) -> PalaverResult<Self> {
        if let Ok(policy) = layers.get_string("parse.unknown_reference") {
            if policy.parse::<UnknownReference>().is_err() {
                warn!(%policy, "Rejecting unknown_reference policy");
                return Err(ConfigError::new(ConfigErrorKind::InvalidPolicy(policy)).into());
            }
        }

        let settings: Self = layers
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))?;
        debug!(
            debounce_ms = settings.search.debounce_ms,
            limit = settings.search.limit,
            unknown_reference = ?settings.parse.unknown_reference,
            "Configuration ready"
        );
        Ok(settings)
    }
}
