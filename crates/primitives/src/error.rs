//! Error types for record and weight validation.

use crate::Metric;

/// Errors raised when constructing primitives that carry invariants.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    /// A metric value is NaN or infinite.
    #[error("non-finite value for {metric} on {symbol}: {value}")]
    NonFinite {
        /// Symbol of the offending record.
        symbol: String,
        /// Metric that failed validation.
        metric: Metric,
        /// The rejected value.
        value: f64,
    },

    /// Symbol is empty after normalization.
    #[error("empty symbol")]
    EmptySymbol,

    /// Display name is empty.
    #[error("empty display name for {0}")]
    EmptyName(String),

    /// Sector name does not match any known sector.
    #[error("unknown sector: {0}")]
    UnknownSector(String),

    /// Dimension weights are negative, non-finite, or do not sum to one.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}
