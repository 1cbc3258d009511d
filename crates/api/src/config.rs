//! Engine configuration.

use std::path::Path;

use peerscore_math::{DEFAULT_LOWER_PCT, DEFAULT_UPPER_PCT};
use peerscore_primitives::{Date, ScoreWeights};
use peerscore_scorer::{ScorerConfig, ScorerError};
use peerscore_source::SourceConfig;
use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Winsorize bounds applied to every metric before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WinsorizeConfig {
    /// Lower percentile, 0 to 100.
    pub lower_pct: u8,
    /// Upper percentile, `lower_pct` to 100.
    pub upper_pct: u8,
}

impl Default for WinsorizeConfig {
    fn default() -> Self {
        Self {
            lower_pct: DEFAULT_LOWER_PCT,
            upper_pct: DEFAULT_UPPER_PCT,
        }
    }
}

/// Configuration of a [`crate::ScoringApi`]. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Snapshot date stamped on source records, as `"YYYY-MM-DD"`. Defaults
    /// to today.
    pub as_of: Option<Date>,
    /// Metric source selection.
    pub source: SourceConfig,
    /// Dimension weights. Validated while parsing.
    pub weights: ScoreWeights,
    /// Winsorize bounds.
    pub winsorize: WinsorizeConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns `ApiError::Toml` for malformed TOML or weights that do not sum
    /// to one, and `ApiError::Config` for invalid winsorize bounds.
    pub fn from_toml_str(s: &str) -> Result<Self, ApiError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    /// Returns `ApiError::Io` if the file cannot be read, otherwise as
    /// [`EngineConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Check weights and winsorize bounds.
    ///
    /// # Errors
    /// Returns `ScorerError` describing the first invalid value.
    pub fn validate(&self) -> Result<(), ScorerError> {
        self.scorer_config().validate()
    }

    /// Scorer settings of this configuration.
    #[must_use]
    pub const fn scorer_config(&self) -> ScorerConfig {
        ScorerConfig {
            weights: self.weights,
            lower_pct: self.winsorize.lower_pct,
            upper_pct: self.winsorize.upper_pct,
        }
    }
}
