//! Error types for the scorer.

use peerscore_math::MathError;
use peerscore_primitives::MetricError;

/// Errors that can occur when configuring the scorer.
#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    /// Invalid dimension weights.
    #[error("invalid weights: {0}")]
    Weights(#[from] MetricError),

    /// Invalid winsorize bounds.
    #[error("invalid winsorize bounds: {0}")]
    Winsorize(#[from] MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err: ScorerError = MathError::InvalidPercentile {
            lower: 90,
            upper: 10,
        }
        .into();
        assert!(err.to_string().starts_with("invalid winsorize bounds"));
    }
}
