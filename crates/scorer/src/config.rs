//! Scorer configuration.

use peerscore_math::{DEFAULT_LOWER_PCT, DEFAULT_UPPER_PCT, Winsorizer};
use peerscore_primitives::ScoreWeights;
use serde::{Deserialize, Serialize};

use crate::ScorerError;

/// Configuration for the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Dimension weights of the total score.
    pub weights: ScoreWeights,
    /// Lower winsorize percentile applied to every metric.
    pub lower_pct: u8,
    /// Upper winsorize percentile applied to every metric.
    pub upper_pct: u8,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            lower_pct: DEFAULT_LOWER_PCT,
            upper_pct: DEFAULT_UPPER_PCT,
        }
    }
}

impl ScorerConfig {
    /// Check the configuration.
    ///
    /// # Errors
    /// Returns `ScorerError` if the weights or winsorize bounds are invalid.
    pub fn validate(&self) -> Result<(), ScorerError> {
        self.weights.validate()?;
        self.winsorizer()?;
        Ok(())
    }

    /// Winsorizer for these bounds.
    ///
    /// # Errors
    /// Returns `ScorerError::Winsorize` if the bounds are out of order.
    pub fn winsorizer(&self) -> Result<Winsorizer, ScorerError> {
        Ok(Winsorizer::new(self.lower_pct, self.upper_pct)?)
    }
}
