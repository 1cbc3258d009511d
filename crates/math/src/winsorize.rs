//! Winsorization for outlier handling.

use crate::MathError;

/// Default lower winsorize percentile.
pub const DEFAULT_LOWER_PCT: u8 = 5;
/// Default upper winsorize percentile.
pub const DEFAULT_UPPER_PCT: u8 = 95;

/// Clamp every value to the bounds found at fixed positions of the sorted
/// sample.
///
/// With `n` values the lower bound is the sorted value at index
/// `n * lower_pct / 100` and the upper bound the one at
/// `n * upper_pct / 100 - 1`, integer division, both clamped into `[0, n-1]`.
/// Fewer than two values are returned unchanged. Order is preserved.
///
/// # Arguments
/// * `values` - Input sample
/// * `lower_pct` - Lower percentile (e.g. 5)
/// * `upper_pct` - Upper percentile (e.g. 95)
#[must_use]
pub fn winsorize(values: &[f64], lower_pct: u8, upper_pct: u8) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    match bounds(&sorted, lower_pct, upper_pct) {
        Some((lb, ub)) => values.iter().map(|&v| clamp(v, lb, ub)).collect(),
        None => values.to_vec(),
    }
}

/// Bounds of an already sorted sample, `None` when it has fewer than two
/// values.
pub(crate) fn bounds(sorted: &[f64], lower_pct: u8, upper_pct: u8) -> Option<(f64, f64)> {
    let n = sorted.len();
    if n < 2 {
        return None;
    }
    let lower_idx = (n * usize::from(lower_pct) / 100).min(n - 1);
    let upper_idx = (n * usize::from(upper_pct) / 100).saturating_sub(1).min(n - 1);
    Some((sorted[lower_idx], sorted[upper_idx]))
}

/// `max(lb, min(ub, v))`. Unlike `f64::clamp` this tolerates `lb > ub`,
/// which the index arithmetic produces for tiny samples.
pub(crate) fn clamp(v: f64, lb: f64, ub: f64) -> f64 {
    v.min(ub).max(lb)
}

/// Winsorization configuration and transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winsorizer {
    lower_pct: u8,
    upper_pct: u8,
}

impl Default for Winsorizer {
    fn default() -> Self {
        Self {
            lower_pct: DEFAULT_LOWER_PCT,
            upper_pct: DEFAULT_UPPER_PCT,
        }
    }
}

impl Winsorizer {
    /// Create a new winsorizer.
    ///
    /// # Errors
    /// Returns `MathError::InvalidPercentile` unless
    /// `lower_pct <= upper_pct <= 100`.
    pub const fn new(lower_pct: u8, upper_pct: u8) -> Result<Self, MathError> {
        if lower_pct > upper_pct || upper_pct > 100 {
            return Err(MathError::InvalidPercentile {
                lower: lower_pct,
                upper: upper_pct,
            });
        }
        Ok(Self {
            lower_pct,
            upper_pct,
        })
    }

    /// Get the lower percentile.
    #[must_use]
    pub const fn lower_pct(&self) -> u8 {
        self.lower_pct
    }

    /// Get the upper percentile.
    #[must_use]
    pub const fn upper_pct(&self) -> u8 {
        self.upper_pct
    }

    /// Apply winsorization to a sample.
    #[must_use]
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        winsorize(values, self.lower_pct, self.upper_pct)
    }

    /// Winsorize an already sorted sample in place. The result stays sorted.
    pub(crate) fn apply_sorted(&self, sorted: &mut [f64]) {
        if let Some((lb, ub)) = bounds(sorted, self.lower_pct, self.upper_pct) {
            for v in sorted.iter_mut() {
                *v = clamp(*v, lb, ub);
            }
        }
    }
}
