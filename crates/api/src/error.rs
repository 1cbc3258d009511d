//! API error types.

use std::path::PathBuf;

use peerscore_scorer::ScorerError;
use peerscore_traits::SourceError;

/// Errors raised while building a [`crate::ScoringApi`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has invalid values.
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Weights or winsorize bounds are invalid.
    #[error("invalid scoring config: {0}")]
    Config(#[from] ScorerError),

    /// The metric source could not be built.
    #[error("metric source: {0}")]
    Source(#[from] SourceError),
}

impl ApiError {
    /// Returns whether this error is recoverable.
    ///
    /// A missing config file can be fixed and retried; everything else needs
    /// a config change.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
