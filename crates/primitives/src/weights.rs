//! Dimension weights for the total score.

use serde::{Deserialize, Serialize};

use crate::{Dimension, MetricError};

/// Tolerance on the weight sum.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights applied to the four dimension scores.
///
/// Every weight is finite and non-negative, and they sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct ScoreWeights {
    quality: f64,
    growth: f64,
    stability: f64,
    valuation: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            quality: 0.30,
            growth: 0.25,
            stability: 0.25,
            valuation: 0.20,
        }
    }
}

impl ScoreWeights {
    /// Create validated weights.
    ///
    /// # Errors
    /// Returns an error if any weight is negative or non-finite, or if the
    /// weights do not sum to one within [`WEIGHT_SUM_TOLERANCE`].
    pub fn new(
        quality: f64,
        growth: f64,
        stability: f64,
        valuation: f64,
    ) -> Result<Self, MetricError> {
        let weights = Self {
            quality,
            growth,
            stability,
            valuation,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check the weight invariants.
    ///
    /// # Errors
    /// See [`ScoreWeights::new`].
    pub fn validate(&self) -> Result<(), MetricError> {
        for dim in Dimension::ALL {
            let w = self.get(dim);
            if !w.is_finite() || w < 0.0 {
                return Err(MetricError::InvalidWeights(format!(
                    "{dim} weight must be finite and non-negative, got {w}"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MetricError::InvalidWeights(format!("weights sum to {sum}, expected 1.0")));
        }
        Ok(())
    }

    /// Weight of one dimension.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Quality => self.quality,
            Dimension::Growth => self.growth,
            Dimension::Stability => self.stability,
            Dimension::Valuation => self.valuation,
        }
    }

    /// Sum of all weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.quality + self.growth + self.stability + self.valuation
    }
}

#[derive(Serialize, Deserialize)]
struct RawWeights {
    quality: f64,
    growth: f64,
    stability: f64,
    valuation: f64,
}

impl TryFrom<RawWeights> for ScoreWeights {
    type Error = MetricError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::new(raw.quality, raw.growth, raw.stability, raw.valuation)
    }
}

impl From<ScoreWeights> for RawWeights {
    fn from(w: ScoreWeights) -> Self {
        Self {
            quality: w.quality,
            growth: w.growth,
            stability: w.stability,
            valuation: w.valuation,
        }
    }
}
