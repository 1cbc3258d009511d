//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Winsorize percentiles out of order or above 100.
    #[error("invalid winsorize percentiles: lower {lower}, upper {upper}")]
    InvalidPercentile {
        /// Lower percentile.
        lower: u8,
        /// Upper percentile.
        upper: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::InvalidPercentile {
            lower: 60,
            upper: 40,
        };
        let msg = err.to_string();
        assert!(msg.contains("60") && msg.contains("40"));
    }
}
